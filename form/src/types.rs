//! Form-side DTOs.
//!
//! `ContactSubmission` mirrors the relay's inbound body but is defined
//! independently; the integration test against a live relay catches drift.

use serde::{Deserialize, Serialize};

/// Raw field values as read from the form, before trimming or validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub phone: String,
    /// Value of the country-code selector, prepended to the phone digits.
    #[serde(default)]
    pub country_code: String,
}

/// A validated submission, serialized as the `POST /api/contact` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Pending,
    Success,
    Error,
}

/// Text for the form's message region, tagged with how to style it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn pending(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Pending,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// What the form should do once a submission round-trip has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub message: StatusMessage,
    /// When true the host clears the `name` and `phone` inputs.
    pub clear_fields: bool,
}
