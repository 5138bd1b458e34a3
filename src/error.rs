use crate::client::Response;
use serde::Deserialize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Body returned by the API alongside a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

/// One entry of the `errors` array of an [`ErrorResponse`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldError {
    pub resource: Option<String>,
    pub field: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Rejected locally, nothing was sent.
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("invalid request: {0}")]
    Request(String),

    #[error("http error: {source}")]
    Http {
        #[source]
        source: reqwest::Error,
        response: Option<Box<Response>>,
    },

    #[error("{} {}: {}", .response.url, .response.status, .body.message)]
    Api {
        response: Box<Response>,
        body: ErrorResponse,
    },

    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        response: Box<Response>,
    },

    #[error("request cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

impl Error {
    /// Response metadata received before the failure, if any.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Http { response, .. } => response.as_deref(),
            Error::Api { response, .. } | Error::Decode { response, .. } => Some(&**response),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.response().map(|r| r.status)
    }
}
