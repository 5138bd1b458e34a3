use super::{CommitAuthor, GitObject, SignatureVerification};
use serde::{Deserialize, Serialize};

/// An annotated Git tag object as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagger: Option<CommitAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<GitObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<SignatureVerification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tag: Some(name.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn with_object(mut self, object: GitObject) -> Self {
        self.object = Some(object);
        self
    }

    pub fn with_tagger(mut self, tagger: CommitAuthor) -> Self {
        self.tagger = Some(tagger);
        self
    }
}

/// Body of a create-tag call.
///
/// Same as [`Tag`] except that the target object's SHA and type are
/// top-level strings rather than a nested `object`. Server-assigned
/// fields (`sha`, `url`, `verification`, `node_id`) are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct CreateTagRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagger: Option<&'a CommitAuthor>,
}

impl<'a> From<&'a Tag> for CreateTagRequest<'a> {
    fn from(tag: &'a Tag) -> Self {
        let (object, object_type) = match &tag.object {
            Some(obj) => (obj.sha.as_deref(), obj.object_type.as_deref()),
            None => (None, None),
        };

        Self {
            tag: tag.tag.as_deref(),
            message: tag.message.as_deref(),
            object,
            object_type,
            tagger: tag.tagger.as_ref(),
        }
    }
}
