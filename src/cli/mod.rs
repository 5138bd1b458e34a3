pub mod create;
pub mod get;

use crate::{Client, Config, Context};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gittags")]
#[command(version)]
#[command(
    about = "Fetch and create annotated Git tag objects through the GitHub API",
    long_about = None
)]
pub struct Cli {
    #[arg(short, long, default_value = "gittags.toml")]
    pub config: PathBuf,

    /// API token, overrides `api.token`
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API root, overrides `api.base_url`
    #[arg(long, env = "GITHUB_API_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a tag object
    Get {
        owner: String,
        repo: String,
        sha: String,
    },
    /// Create a tag object
    Create {
        owner: String,
        repo: String,
        #[arg(long)]
        tag: String,
        #[arg(short, long)]
        message: String,
        /// SHA of the object being tagged
        #[arg(long)]
        object: Option<String>,
        #[arg(long = "type", default_value = "commit")]
        object_type: String,
        #[arg(long, requires = "tagger_email")]
        tagger_name: Option<String>,
        #[arg(long, requires = "tagger_name")]
        tagger_email: Option<String>,
        /// RFC 3339 timestamp, e.g. 2024-01-31T12:00:00Z
        #[arg(long, requires = "tagger_name")]
        tagger_date: Option<String>,
    },
}

/// Resolved settings shared by every subcommand.
pub struct Session {
    pub client: Client,
    pub ctx: Context,
}

impl Session {
    pub fn open(cli: &Cli) -> Result<Self> {
        let mut config = Config::load_or_default(&cli.config)?;
        if let Some(ref base_url) = cli.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(ref token) = cli.token {
            config.api.token = Some(token.clone());
        }
        config.validate()?;

        let client = Client::from_config(&config.api)?;
        let mut ctx = Context::background();
        if let Some(timeout) = config.api.timeout() {
            ctx = ctx.with_timeout(timeout);
        }

        let token = ctx.cancellation_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupted, cancelling request");
                token.cancel();
            }
        });

        tracing::debug!("Using API at {}", client.base_url());
        Ok(Self { client, ctx })
    }
}
