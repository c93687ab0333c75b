//! WATI template-broadcast request construction.

use serde::Serialize;

use crate::config::RelayConfig;
use crate::types::ContactSubmission;
use crate::upstream::UpstreamRequest;

pub const CONTENT_TYPE: &str = "application/json-patch+json";

#[derive(Debug, Clone, Serialize)]
pub struct BroadcastPayload {
    pub template_name: String,
    pub broadcast_name: String,
    pub parameters: Vec<TemplateParameter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateParameter {
    pub name: String,
    pub value: String,
}

impl BroadcastPayload {
    pub fn new(config: &RelayConfig, contact: &ContactSubmission) -> Self {
        Self {
            template_name: config.template_name.clone(),
            broadcast_name: config.broadcast_name.clone(),
            parameters: vec![
                TemplateParameter {
                    name: "name".to_string(),
                    value: contact.name.clone(),
                },
                TemplateParameter {
                    name: "phone".to_string(),
                    value: contact.phone.clone(),
                },
            ],
        }
    }
}

/// `<api_url>?whatsappNumber=<phone>`, appending with `&` when the
/// configured URL already carries a query string.
pub fn target_url(api_url: &str, phone: &str) -> String {
    let sep = if api_url.contains('?') { '&' } else { '?' };
    format!("{api_url}{sep}whatsappNumber={}", urlencoding::encode(phone))
}

/// Build the provider request. `Authorization` is only sent when a key is
/// configured, and then verbatim.
pub fn build_request(
    api_url: &str,
    config: &RelayConfig,
    contact: &ContactSubmission,
) -> Result<UpstreamRequest, serde_json::Error> {
    let mut headers = vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())];
    if let Some(key) = &config.api_key {
        headers.push(("Authorization".to_string(), key.clone()));
    }

    Ok(UpstreamRequest {
        url: target_url(api_url, &contact.phone),
        method: "POST".to_string(),
        headers,
        body: serde_json::to_value(BroadcastPayload::new(config, contact))?,
    })
}
