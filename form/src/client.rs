//! Stateless request builder and response interpreter for the contact form.
//!
//! # Design
//! `ContactFormClient` holds only the relay endpoint. A submission is split
//! into `validate` (pure input checks), `build_submit` (produces an
//! `HttpRequest`) and `parse_submit` (turns the `HttpResponse` into the
//! message the form displays). The host executes the HTTP round-trip and
//! calls `transport_failed` if it never got a response.

use serde_json::Value;

use crate::error::FormError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ContactSubmission, FormInput, StatusMessage, SubmitOutcome};
use crate::validate;

pub const CONTACT_PATH: &str = "/api/contact";

const SENDING: &str = "Sending...";
const DEFAULT_SUCCESS: &str = "Form submitted successfully!";
const DEFAULT_FAILURE: &str = "Failed to submit form.";
const UNREADABLE_ERROR: &str = "An unknown error occurred.";
const TRANSPORT_FAILURE: &str = "An error occurred while submitting the form. Please try again.";

/// How the form reads a relay response body.
enum ResponseBody {
    /// Not JSON at all.
    Unreadable,
    /// JSON `null`; reading `.message` off it fails like a dropped request.
    Null,
    /// Any other JSON value. Only an object can carry a message.
    Value(Value),
}

impl ResponseBody {
    fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Err(_) => ResponseBody::Unreadable,
            Ok(Value::Null) => ResponseBody::Null,
            Ok(value) => ResponseBody::Value(value),
        }
    }
}

/// `message` when the body is an object holding a non-empty string there.
fn message_of(value: &Value) -> Option<&str> {
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

#[derive(Debug, Clone)]
pub struct ContactFormClient {
    endpoint: String,
}

impl ContactFormClient {
    /// `base_url` may be empty, in which case requests target the relative
    /// path `/api/contact` as a same-origin browser form would.
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn validate(&self, input: &FormInput) -> Result<ContactSubmission, FormError> {
        validate::validate(input)
    }

    pub fn build_submit(&self, submission: &ContactSubmission) -> Result<HttpRequest, FormError> {
        let body =
            serde_json::to_string(submission).map_err(|e| FormError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.endpoint.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Validate and build in one step. On error the returned message is what
    /// the form shows; no request exists, so nothing is sent.
    pub fn prepare(&self, input: &FormInput) -> Result<HttpRequest, StatusMessage> {
        self.validate(input)
            .and_then(|submission| self.build_submit(&submission))
            .map_err(|e| e.status_message())
    }

    /// Shown while the request is in flight.
    pub fn sending(&self) -> StatusMessage {
        StatusMessage::pending(SENDING)
    }

    pub fn parse_submit(&self, response: HttpResponse) -> SubmitOutcome {
        let body = ResponseBody::parse(&response.body);

        if response.is_success() {
            // A 2xx body that is not JSON, or is `null`, is treated like a failed round-trip.
            let value = match body {
                ResponseBody::Value(value) => value,
                ResponseBody::Unreadable | ResponseBody::Null => return self.transport_failed(),
            };
            return SubmitOutcome {
                message: StatusMessage::success(message_of(&value).unwrap_or(DEFAULT_SUCCESS)),
                clear_fields: true,
            };
        }

        let message = match &body {
            ResponseBody::Value(value) => message_of(value).unwrap_or(DEFAULT_FAILURE),
            ResponseBody::Unreadable => UNREADABLE_ERROR,
            ResponseBody::Null => return self.transport_failed(),
        };
        SubmitOutcome {
            message: StatusMessage::error(format!("Error: {} - {message}", response.status)),
            clear_fields: false,
        }
    }

    pub fn transport_failed(&self) -> SubmitOutcome {
        SubmitOutcome {
            message: StatusMessage::error(TRANSPORT_FAILURE),
            clear_fields: false,
        }
    }
}
