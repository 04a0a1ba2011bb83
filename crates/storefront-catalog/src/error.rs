use thiserror::Error;

/// Errors surfaced by the catalog client and normalizers.
///
/// Every failure degrades to an inline error state at the view boundary;
/// none is fatal to the process.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Timeout, connectivity, or TLS failure from the underlying client.
    #[error("network failure during {context}: {source}")]
    Network {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("unexpected HTTP status {status} during {context}")]
    UnexpectedStatus { status: u16, context: String },

    /// The payload matched none of the known response envelopes.
    #[error("unexpected response shape for {context}")]
    UnexpectedResponseShape { context: String },

    /// No usable identifier could be located across all alias candidates.
    #[error("malformed product data: {reason}")]
    MalformedProductData { reason: String },

    /// Caller-side input failed validation before any request was made.
    #[error("validation failure: {reason}")]
    Validation { reason: String },

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// The HTTP status associated with this error, when one was observed.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::UnexpectedStatus { status, .. } => Some(*status),
            CatalogError::Network { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
