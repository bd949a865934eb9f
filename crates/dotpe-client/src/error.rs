use thiserror::Error;

/// Errors returned by the DotPe API client.
#[derive(Debug, Error)]
pub enum DotpeError {
    /// Network, DNS, or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with anything other than `200 OK`.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not valid JSON. `body` holds the (possibly
    /// truncated) raw text.
    #[error("JSON decode error for {context}: {source}; body: {body}")]
    Deserialize {
        context: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A configured header could not be turned into an HTTP header.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl DotpeError {
    /// The HTTP status code, when the failure was a non-200 response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
