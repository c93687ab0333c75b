//! The `/api/contact` handler.
//!
//! Every method is routed here so preflight, 405 and submission handling
//! share one state machine: method check, input check, config check,
//! payload build, forward (or simulate), relay.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info, warn, Instrument};
use uuid::Uuid;

use crate::error::{RelayError, ALLOWED_METHODS};
use crate::types::{ContactSubmission, RelayOutcome, SimulatedRelay};
use crate::wati;
use crate::AppState;

const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
const TEST_MODE_MESSAGE: &str =
    "API Test Mode: Request logged to console, not sent to third-party API.";

pub async fn contact(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("contact", %request_id, %method);

    async move {
        if method == Method::OPTIONS {
            return preflight();
        }
        if method != Method::POST {
            warn!("rejecting method");
            return RelayError::MethodNotAllowed(method).into_response();
        }

        match submit(&state, &body).await {
            Ok(response) => response,
            Err(err) => {
                if err.status().is_server_error() {
                    error!(error = %err, "submission failed");
                } else {
                    info!(error = %err, "submission rejected");
                }
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ALLOW, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
        .into_response()
}

async fn submit(state: &AppState, body: &[u8]) -> Result<Response, RelayError> {
    let contact = ContactSubmission::from_body(body)?;

    let config = &state.config;
    let api_url = config.api_url.as_deref().ok_or(RelayError::MissingApiUrl)?;

    let request = wati::build_request(api_url, config, &contact).map_err(RelayError::Payload)?;
    info!(url = %request.url, "prepared upstream request");

    if config.test_mode {
        info!(
            request = %serde_json::to_string_pretty(&request).unwrap_or_default(),
            "test mode: upstream request not sent"
        );
        let simulated = SimulatedRelay {
            message: TEST_MODE_MESSAGE.to_string(),
            simulated_request: request,
        };
        return Ok((StatusCode::OK, Json(simulated)).into_response());
    }

    let response = state.upstream.send(request).await?;
    info!(status = response.status, body = %response.body, "upstream responded");

    Ok(RelayOutcome::try_from(response)?.into_response())
}
