//! Store error type.

/// Errors produced by message store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required configuration variable is not set.
    #[error("missing store config: env var {var} not set")]
    MissingConfig { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The process was started without a store URL.
    #[error("message store is not configured")]
    NotConfigured,

    /// The HTTP request to the store failed before a response arrived.
    #[error("store request failed: {0}")]
    Request(String),

    /// The store returned a non-success HTTP status.
    #[error("store response error: status {status}")]
    Response { status: u16, body: String },

    /// The store response body could not be deserialized.
    #[error("store response decode failed: {0}")]
    Decode(String),

    /// The store accepted an insert but returned no row.
    #[error("store accepted the insert but returned no row")]
    EmptyInsert,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl StoreError {
    /// Stable machine-readable code for API error bodies.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingConfig { .. } => "E_MISSING_CONFIG",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::NotConfigured => "E_NOT_CONFIGURED",
            Self::Request(_) => "E_STORE_REQUEST",
            Self::Response { .. } => "E_STORE_RESPONSE",
            Self::Decode(_) => "E_STORE_DECODE",
            Self::EmptyInsert => "E_EMPTY_INSERT",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether a caller could reasonably try the same call again.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
