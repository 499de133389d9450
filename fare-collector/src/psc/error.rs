//! Price-search client error types.

use std::fmt;

/// Errors from the price-search HTTP client.
///
/// All of these abort the current run: the collector treats transport
/// failures and undecodable bodies as fatal rather than retrying.
#[derive(Debug)]
pub enum PscError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Query payload could not be serialized
    Encode(serde_json::Error),

    /// JSON deserialization of the response body failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Service returned an error status code
    Api { status: u16, message: String },
}

impl fmt::Display for PscError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PscError::Http(e) => write!(f, "HTTP error: {e}"),
            PscError::Encode(e) => write!(f, "query encode error: {e}"),
            PscError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            PscError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
        }
    }
}

impl std::error::Error for PscError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PscError::Http(e) => Some(e),
            PscError::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PscError {
    fn from(err: reqwest::Error) -> Self {
        PscError::Http(err)
    }
}

impl From<serde_json::Error> for PscError {
    fn from(err: serde_json::Error) -> Self {
        PscError::Encode(err)
    }
}
