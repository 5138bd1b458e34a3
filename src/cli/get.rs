use super::Session;
use crate::services::tags;
use anyhow::Result;

pub async fn run(session: &Session, owner: &str, repo: &str, sha: &str) -> Result<()> {
    let (tag, response) = tags::get_tag(&session.client, &session.ctx, owner, repo, sha).await?;
    tracing::debug!("GET {} -> {}", response.url, response.status);

    println!("{}", serde_json::to_string_pretty(&tag)?);
    Ok(())
}
