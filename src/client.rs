use crate::config::ApiConfig;
use crate::context::Context;
use crate::error::{Error, ErrorResponse, Result};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, LINK, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";
pub const DEFAULT_USER_AGENT: &str = concat!("gittags/", env!("CARGO_PKG_VERSION"));

const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_USED: &str = "X-RateLimit-Used";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";
const HEADER_RATE_RESOURCE: &str = "X-RateLimit-Resource";

/// Shared HTTP collaborator: builds authenticated requests and runs them.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    user_agent: String,
    token: Option<String>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parse_base_url(base_url)?,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut client = Self::new(&config.base_url)?.with_user_agent(&config.user_agent);
        if let Some(ref token) = config.token {
            client = client.with_token(token);
        }
        Ok(client)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a request for `path`, resolved against the base URL.
    ///
    /// `body`, when given, is sent as JSON.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Request(format!("cannot resolve path {:?}: {}", path, e)))?;

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, MEDIA_TYPE_V3)
            .header(USER_AGENT, &self.user_agent)
            .header(API_VERSION_HEADER, API_VERSION);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| Error::Request(format!("cannot encode request body: {}", e)))?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        }

        builder.build().map_err(|e| Error::Request(e.to_string()))
    }

    /// Sends `request` and decodes a 2xx body into `T`.
    ///
    /// Non-2xx statuses become [`Error::Api`]. Every error raised after the
    /// response head arrived carries its metadata.
    pub async fn execute<T>(
        &self,
        ctx: &Context,
        request: reqwest::Request,
    ) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
    {
        ctx.run(self.round_trip(request)).await
    }

    async fn round_trip<T>(&self, request: reqwest::Request) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|source| Error::Http {
                source,
                response: None,
            })?;

        let response = Response::new(resp.status(), resp.url().clone(), resp.headers().clone());
        let bytes = match resp.bytes().await {
            Ok(b) => b,
            Err(source) => {
                return Err(Error::Http {
                    source,
                    response: Some(Box::new(response)),
                })
            }
        };

        if !response.status.is_success() {
            let body = serde_json::from_slice::<ErrorResponse>(&bytes).unwrap_or_else(|_| {
                ErrorResponse {
                    message: String::from_utf8_lossy(&bytes).trim().to_string(),
                    ..Default::default()
                }
            });
            tracing::warn!(
                status = %response.status,
                url = %response.url,
                "API error: {}",
                body.message
            );
            return Err(Error::Api {
                response: Box::new(response),
                body,
            });
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(Error::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    if !base_url.ends_with('/') {
        return Err(Error::Request(format!(
            "base URL must have a trailing slash, but {:?} does not",
            base_url
        )));
    }
    Url::parse(base_url)
        .map_err(|e| Error::Request(format!("invalid base URL {:?}: {}", base_url, e)))
}

/// Out-of-band data accompanying a response body.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub url: Url,
    pub headers: HeaderMap,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub first_page: Option<u32>,
    pub last_page: Option<u32>,
    pub rate: Rate,
}

impl Response {
    pub fn new(status: StatusCode, url: Url, headers: HeaderMap) -> Self {
        let mut response = Self {
            status,
            url,
            next_page: None,
            prev_page: None,
            first_page: None,
            last_page: None,
            rate: Rate::from_headers(&headers),
            headers,
        };
        response.populate_page_values();
        response
    }

    /// Reads page numbers from a header such as
    /// `<https://api.github.com/...?page=2>; rel="next", <...?page=5>; rel="last"`.
    fn populate_page_values(&mut self) {
        let Some(link) = self.headers.get(LINK).and_then(|v| v.to_str().ok()) else {
            return;
        };

        for entry in link.split(',') {
            let mut segments = entry.split(';');
            let Some(target) = segments.next().map(str::trim) else {
                continue;
            };
            let Some(target) = target.strip_prefix('<').and_then(|t| t.strip_suffix('>')) else {
                continue;
            };
            let Ok(target) = Url::parse(target) else {
                continue;
            };
            let Some(page) = target
                .query_pairs()
                .find(|(k, _)| k == "page")
                .and_then(|(_, v)| v.parse::<u32>().ok())
            else {
                continue;
            };

            for segment in segments {
                match segment.trim() {
                    r#"rel="next""# => self.next_page = Some(page),
                    r#"rel="prev""# => self.prev_page = Some(page),
                    r#"rel="first""# => self.first_page = Some(page),
                    r#"rel="last""# => self.last_page = Some(page),
                    _ => {}
                }
            }
        }
    }
}

/// Rate limit state reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rate {
    pub limit: Option<u32>,
    pub remaining: Option<u32>,
    pub used: Option<u32>,
    pub reset: Option<DateTime<Utc>>,
    pub resource: Option<String>,
}

impl Rate {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let text = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        let number = |name: &str| text(name).and_then(|v| v.trim().parse::<u32>().ok());

        Self {
            limit: number(HEADER_RATE_LIMIT),
            remaining: number(HEADER_RATE_REMAINING),
            used: number(HEADER_RATE_USED),
            reset: text(HEADER_RATE_RESET)
                .and_then(|v| v.trim().parse::<i64>().ok())
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            resource: text(HEADER_RATE_RESOURCE).map(str::to_string),
        }
    }
}
