use super::Session;
use crate::models::{CommitAuthor, GitObject, Tag};
use crate::services::tags;
use anyhow::{Context as _, Result};
use chrono::DateTime;

pub struct CreateArgs {
    pub tag: String,
    pub message: String,
    pub object: Option<String>,
    pub object_type: String,
    pub tagger_name: Option<String>,
    pub tagger_email: Option<String>,
    pub tagger_date: Option<String>,
}

impl CreateArgs {
    pub fn into_tag(self) -> Result<Tag> {
        let mut tag = Tag::new(self.tag, self.message);

        if let Some(sha) = self.object {
            tag = tag.with_object(GitObject::new(sha, self.object_type));
        }

        if let (Some(name), Some(email)) = (self.tagger_name, self.tagger_email) {
            let mut tagger = CommitAuthor::new(name, email);
            if let Some(date) = self.tagger_date {
                let date = DateTime::parse_from_rfc3339(&date)
                    .with_context(|| format!("Invalid tagger date '{}'", date))?;
                tagger = tagger.with_date(date);
            }
            tag = tag.with_tagger(tagger);
        }

        Ok(tag)
    }
}

pub async fn run(session: &Session, owner: &str, repo: &str, args: CreateArgs) -> Result<()> {
    let tag = args.into_tag()?;
    let (created, response) =
        tags::create_tag(&session.client, &session.ctx, owner, repo, Some(&tag)).await?;

    tracing::info!(
        "Created tag '{}' ({}) in {}/{} [{}]",
        created.tag.as_deref().unwrap_or_default(),
        created.sha.as_deref().unwrap_or_default(),
        owner,
        repo,
        response.status
    );
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}
