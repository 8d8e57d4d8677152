use thiserror::Error;

/// Errors returned by [`crate::HhClient`].
#[derive(Debug, Error)]
pub enum HhError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl HhError {
    /// `true` when the request never produced a usable HTTP response.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, HhError::Http(_) | HhError::UnexpectedStatus { .. })
    }
}
