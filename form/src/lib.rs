//! Client core for the contact form.
//!
//! # Overview
//! Validates the form's `name` / `phone` fields, builds the `POST /api/contact`
//! request for the relay and interprets the relay's response as the status
//! message the form displays. No network access happens here
//! (host-does-IO pattern).
//!
//! # Design
//! - `ContactFormClient` is stateless; it holds only the endpoint.
//! - Phone policy: 7-15 digits after whitespace removal, prefixed with the
//!   selected country code.
//! - Invalid input yields a `StatusMessage`, never an `HttpRequest`, so a
//!   rejected submission cannot reach the network.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod validate;

pub use client::{ContactFormClient, CONTACT_PATH};
pub use error::FormError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ContactSubmission, FormInput, MessageKind, StatusMessage, SubmitOutcome};
