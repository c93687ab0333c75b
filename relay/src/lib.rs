//! Contact-form relay.
//!
//! # Overview
//! Serves `/api/contact`: answers CORS preflight, validates `{name, phone}`
//! and forwards a WATI template-broadcast request to the configured
//! provider, replaying the provider's status and body to the caller.
//!
//! # Design
//! - No state survives a request. `AppState` only shares the immutable
//!   config and the upstream transport.
//! - The provider is reached through the `Upstream` trait so tests can run
//!   the handler without a network.

pub mod config;
pub mod error;
pub mod handler;
pub mod types;
pub mod upstream;
pub mod wati;

use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;

pub use config::{ConfigError, RelayConfig};
pub use error::RelayError;
pub use types::{ContactSubmission, RelayBody, RelayOutcome};
pub use upstream::{Upstream, UpstreamError, UpstreamRequest, UpstreamResponse, UreqUpstream};

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(config: RelayConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }

    /// State with the production `ureq` transport.
    pub fn from_config(config: RelayConfig) -> Self {
        let upstream = Arc::new(UreqUpstream::new(config.request_timeout));
        Self::new(config, upstream)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(CONTACT_PATH, any(handler::contact))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
