//! Outbound transport to the messaging provider.
//!
//! # Design
//! The handler talks to the provider only through the `Upstream` trait, with
//! requests and responses described as plain data. `UreqUpstream` is the
//! production implementation; tests swap in a recording fake or point it at a
//! `mockito` server.
//!
//! Non-2xx statuses are returned as `UpstreamResponse`, never as errors: the
//! relay passes them through verbatim.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, TLS or protocol failure.
    #[error("upstream transport failed: {0}")]
    Transport(String),

    /// The call did not finish within the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// The response body could not be read.
    #[error("upstream body unreadable: {0}")]
    Body(String),

    /// The blocking worker running the call panicked or was cancelled.
    #[error("upstream worker failed: {0}")]
    Join(String),
}

/// A provider request described as plain data.
///
/// Also serialized verbatim as `simulatedRequest` in test mode, with the
/// headers rendered as a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpstreamRequest {
    pub url: String,
    pub method: String,
    #[serde(serialize_with = "headers_as_object")]
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl UpstreamRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn headers_as_object<S>(headers: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(headers.iter().map(|(k, v)| (k, v)))
}

/// A provider response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }
}

#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}

/// `ureq`-backed transport. The blocking call runs on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct UreqUpstream {
    agent: ureq::Agent,
}

impl UreqUpstream {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

#[async_trait]
impl Upstream for UreqUpstream {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute(&agent, &request))
            .await
            .map_err(|e| UpstreamError::Join(e.to_string()))?
    }
}

fn execute(agent: &ureq::Agent, request: &UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
    let body = serde_json::to_string(&request.body).map_err(|e| UpstreamError::Body(e.to_string()))?;

    let mut builder = agent.post(request.url.as_str());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder.send(body.as_bytes()).map_err(map_ureq_error)?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| match e {
            ureq::Error::Timeout(_) => UpstreamError::Timeout,
            other => UpstreamError::Body(other.to_string()),
        })?;

    Ok(UpstreamResponse {
        status,
        content_type,
        body,
    })
}

fn map_ureq_error(err: ureq::Error) -> UpstreamError {
    match err {
        ureq::Error::Timeout(_) => UpstreamError::Timeout,
        other => UpstreamError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn simulated_request_renders_headers_as_object() {
        let req = UpstreamRequest {
            url: "https://wati.test/send?whatsappNumber=1".to_string(),
            method: "POST".to_string(),
            headers: vec![
                ("Content-Type".to_string(), "application/json-patch+json".to_string()),
                ("Authorization".to_string(), "Bearer k".to_string()),
            ],
            body: json!({"template_name": "t"}),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://wati.test/send?whatsappNumber=1",
                "method": "POST",
                "headers": {
                    "Content-Type": "application/json-patch+json",
                    "Authorization": "Bearer k"
                },
                "body": {"template_name": "t"}
            })
        );
        assert_eq!(req.header("authorization"), Some("Bearer k"));
        assert_eq!(req.header("x-missing"), None);
    }

    #[test]
    fn json_detection_follows_content_type() {
        let mut resp = UpstreamResponse {
            status: 200,
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: "{}".to_string(),
        };
        assert!(resp.is_json());
        resp.content_type = Some("text/plain".to_string());
        assert!(!resp.is_json());
        resp.content_type = None;
        assert!(!resp.is_json());
    }
}
