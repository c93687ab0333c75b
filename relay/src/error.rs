//! Relay error taxonomy and its HTTP mapping.
//!
//! Client errors (400, 405) carry a message safe to show verbatim. Every
//! 500-class variant answers with the same generic message; its detail only
//! reaches the server log.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

const INTERNAL_MESSAGE: &str = "An internal server error occurred. Please try again later.";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Name and phone are required.")]
    MissingFields,

    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),

    #[error("Server configuration error: Missing API URL.")]
    MissingApiUrl,

    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("could not encode upstream payload: {0}")]
    Payload(#[source] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("upstream declared JSON but sent something else: {0}")]
    UpstreamJson(#[source] serde_json::Error),

    #[error("upstream returned unusable status {0}")]
    InvalidUpstreamStatus(u16),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingFields => StatusCode::BAD_REQUEST,
            RelayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text returned to the caller.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::MissingFields
            | RelayError::MethodNotAllowed(_)
            | RelayError::MissingApiUrl => self.to_string(),
            _ => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "message": self.public_message() }));
        match self {
            RelayError::MethodNotAllowed(_) => {
                (status, [(header::ALLOW, ALLOWED_METHODS)], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}
