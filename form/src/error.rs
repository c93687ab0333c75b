//! Validation errors raised before a submission leaves the form.
//!
//! The `Display` text of each variant is exactly what the form shows the
//! user, so hosts can render `err.to_string()` directly.

use thiserror::Error;

use crate::types::StatusMessage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// `name` or `phone` was empty after trimming.
    #[error("Please fill in all fields.")]
    MissingFields,

    /// The phone number is not 7-15 digits once whitespace is removed.
    #[error("Please enter a valid phone number (7-15 digits).")]
    InvalidPhone,

    /// The submission could not be serialized to JSON.
    #[error("Could not prepare the submission: {0}")]
    Serialization(String),
}

impl FormError {
    pub fn status_message(&self) -> StatusMessage {
        StatusMessage::error(self.to_string())
    }
}
