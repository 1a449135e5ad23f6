use thiserror::Error;

/// Failures of a whole catalog fetch cycle. Per-listing problems are not
/// errors at this level; they surface as [`crate::normalize::Rejection`]
/// and shrink the batch instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog envelope rejected: {reason}")]
    Envelope { reason: String },

    #[error("invalid catalog endpoint \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
