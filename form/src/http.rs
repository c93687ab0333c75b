//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The form core builds an `HttpRequest` and interprets an `HttpResponse`
//! without touching the network. Whatever embeds the form (a browser shim, a
//! CLI, a test harness) performs the round-trip in between and reports a
//! transport failure through `ContactFormClient::transport_failed`.

/// HTTP method for a request. The contact form only ever submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `ContactFormClient::parse_submit`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
