use crate::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-call deadline in seconds (0 = none)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.ends_with('/') {
            anyhow::bail!(
                "api.base_url must have a trailing slash, but '{}' does not",
                self.base_url
            );
        }
        if let Err(e) = url::Url::parse(&self.base_url) {
            anyhow::bail!("api.base_url '{}' is not a valid URL: {}", self.base_url, e);
        }
        if self.user_agent.trim().is_empty() {
            anyhow::bail!("api.user_agent must not be empty");
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Parses `path`. Not validated: flag and env overrides are applied first.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `path` if it exists, then the user-level config file, else defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }
        match Self::user_config_path() {
            Some(user_path) if user_path.exists() => Self::load(&user_path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/gittags/config.toml`, e.g. `~/.config/gittags/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gittags").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        self.api.validate()
    }
}
