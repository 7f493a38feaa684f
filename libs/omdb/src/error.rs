use thiserror::Error;

#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("OMDb API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("JSON parse error at '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),
}

impl OmdbError {
    /// Whether the failure happened before a usable response arrived
    /// (timeout, DNS, refused connection, non-JSON error page).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Api { .. })
    }
}
