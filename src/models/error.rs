use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;

use crate::providers::ProviderError;

/// HTTP error body returned by every endpoint: a status plus `{ "error": … }`.
#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({ "error": message })),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

impl From<ProviderError> for Error {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::MissingCredentials(what) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Server configuration error: {what} not configured"),
            ),
            ProviderError::Upstream { status, message } => Self::new(status, &message),
            ProviderError::Rejected(message) => Self::new(StatusCode::BAD_GATEWAY, &message),
            ProviderError::Network(error) => {
                Self::new(StatusCode::BAD_GATEWAY, &error.to_string())
            }
            ProviderError::Shape(message) => Self::new(StatusCode::BAD_GATEWAY, &message),
        }
    }
}
