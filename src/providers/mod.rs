pub mod gnews;
pub mod huggingface;
pub mod imgflip;
pub mod memegen;

use http::StatusCode;
use thiserror::Error;

/// Failure talking to a third-party service. Handlers map these onto HTTP
/// statuses; the generation flow maps them onto fallback values instead.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} missing")]
    MissingCredentials(&'static str),
    #[error("upstream returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },
    #[error("upstream rejected the request: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}
