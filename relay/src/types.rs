//! Relay-side DTOs.
//!
//! # Design
//! The inbound body is read as loose JSON rather than a derived struct so a
//! missing, null, non-string or empty field maps to 400, while a body that is
//! not JSON at all is an internal failure. `RelayOutcome` keeps the provider's
//! JSON and text bodies apart so text is never re-wrapped as a JSON string.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::RelayError;
use crate::upstream::{UpstreamRequest, UpstreamResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
}

impl ContactSubmission {
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(RelayError::MalformedBody)?;
        let field = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        match (field("name"), field("phone")) {
            (Some(name), Some(phone)) => Ok(Self { name, phone }),
            _ => Err(RelayError::MissingFields),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelayBody {
    Json(serde_json::Value),
    Text(String),
}

/// The provider's status and body, replayed to the original caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayOutcome {
    pub status: StatusCode,
    pub body: RelayBody,
}

impl TryFrom<UpstreamResponse> for RelayOutcome {
    type Error = RelayError;

    fn try_from(response: UpstreamResponse) -> Result<Self, Self::Error> {
        let status = StatusCode::from_u16(response.status)
            .map_err(|_| RelayError::InvalidUpstreamStatus(response.status))?;
        let body = if response.is_json() {
            RelayBody::Json(
                serde_json::from_str(&response.body).map_err(RelayError::UpstreamJson)?,
            )
        } else {
            RelayBody::Text(response.body)
        };
        Ok(Self { status, body })
    }
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        match self.body {
            RelayBody::Json(value) => (self.status, Json(value)).into_response(),
            RelayBody::Text(text) => (
                self.status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response(),
        }
    }
}

/// Test-mode response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedRelay {
    pub message: String,
    pub simulated_request: UpstreamRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_and_phone() {
        let sub = ContactSubmission::from_body(br#"{"name":"Ana","phone":"15551234567","extra":1}"#)
            .unwrap();
        assert_eq!(sub.name, "Ana");
        assert_eq!(sub.phone, "15551234567");
    }

    #[test]
    fn missing_empty_or_non_string_fields_are_missing() {
        for body in [
            r#"{"name":"Ana"}"#,
            r#"{"phone":"1"}"#,
            r#"{"name":"","phone":"1"}"#,
            r#"{"name":"Ana","phone":null}"#,
            r#"{"name":"Ana","phone":15551234567}"#,
            r#"[]"#,
        ] {
            let err = ContactSubmission::from_body(body.as_bytes()).unwrap_err();
            assert!(matches!(err, RelayError::MissingFields), "{body}");
        }
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = ContactSubmission::from_body(b"name=Ana").unwrap_err();
        assert!(matches!(err, RelayError::MalformedBody(_)));
    }

    #[test]
    fn outcome_parses_json_and_keeps_text() {
        let outcome = RelayOutcome::try_from(UpstreamResponse {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: r#"{"id":1}"#.to_string(),
        })
        .unwrap();
        assert_eq!(outcome.status, StatusCode::OK);
        assert_eq!(outcome.body, RelayBody::Json(serde_json::json!({"id": 1})));

        let outcome = RelayOutcome::try_from(UpstreamResponse {
            status: 503,
            content_type: Some("text/plain".to_string()),
            body: "unavailable".to_string(),
        })
        .unwrap();
        assert_eq!(outcome.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(outcome.body, RelayBody::Text("unavailable".to_string()));
    }

    #[test]
    fn outcome_rejects_bad_json_and_bad_status() {
        let err = RelayOutcome::try_from(UpstreamResponse {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: "<html>".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, RelayError::UpstreamJson(_)));

        let err = RelayOutcome::try_from(UpstreamResponse {
            status: 1000,
            content_type: None,
            body: String::new(),
        })
        .unwrap_err();
        assert!(matches!(err, RelayError::InvalidUpstreamStatus(1000)));
    }
}
