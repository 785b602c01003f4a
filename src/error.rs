use actix_web::{HttpResponse, http::StatusCode};
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Every handler is a terminal boundary: it converts its own failures into a
/// response via [`ApiError::to_response`] and nothing propagates past it.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unable to parse the identifier: {0}")]
    MalformedIdentifier(String),

    #[error("unable to parse the resource: {0}")]
    BadRequest(String),

    #[error("unable to locate the resource")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedIdentifier(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Build the client-facing response: status code plus `{"error": <message>}`.
    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
