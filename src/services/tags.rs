//! Git tag objects: `repos/{owner}/{repo}/git/tags`.

use crate::models::{CreateTagRequest, Tag};
use crate::{Client, Context, Error, Response, Result};
use reqwest::Method;

/// Fetch a tag object by its SHA.
pub async fn get_tag(
    client: &Client,
    ctx: &Context,
    owner: &str,
    repo: &str,
    sha: &str,
) -> Result<(Tag, Response)> {
    let path = format!("repos/{}/{}/git/tags/{}", owner, repo, sha);
    let request = client.new_request::<()>(Method::GET, &path, None)?;
    client.execute(ctx, request).await
}

/// Create an annotated tag object.
///
/// Only `tag`, `message`, `tagger` and the target object's SHA and type
/// are sent; the rest of `tag` is assigned by the server.
pub async fn create_tag(
    client: &Client,
    ctx: &Context,
    owner: &str,
    repo: &str,
    tag: Option<&Tag>,
) -> Result<(Tag, Response)> {
    let tag = tag.ok_or(Error::InvalidInput("tag must be provided"))?;

    let path = format!("repos/{}/{}/git/tags", owner, repo);
    let body = CreateTagRequest::from(tag);
    let request = client.new_request(Method::POST, &path, Some(&body))?;
    client.execute(ctx, request).await
}
