use super::{error_response, json_response, AppState};
use crate::gateway::{self, GatewayError};
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use serde_json::Value;
use std::fmt;
use tracing::{error, warn};

/// Handles `POST /contracts/analyze`: reads the raw body, checks it is valid
/// JSON and hands it to the gateway. Every failure ends up as an HTTP
/// response here - a bad request never takes the process down.
pub(crate) async fn handler<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body + Unpin,
    B::Error: fmt::Display,
{
    match process(req, state).await {
        Ok(payload) => json_response(StatusCode::OK, &payload),
        Err(e) => {
            match &e {
                // already logged by the gateway, with the raw body
                GatewayError::HandlerRejected { .. } => {}
                GatewayError::InvalidJson => warn!("Rejected request: {e}"),
                _ => error!("Request failed: {e}"),
            }

            // out-of-range codes from a broken handler fall back to 500
            let status =
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, &e.to_string())
        }
    }
}

async fn process<B>(req: Request<B>, state: &AppState) -> Result<Value, GatewayError>
where
    B: Body + Unpin,
    B::Error: fmt::Display,
{
    let bytes = req
        .into_body()
        .collect()
        .await
        .map_err(|e| GatewayError::Internal(e.to_string()))?
        .to_bytes();

    // The proxy only checks that the body is valid JSON. The handler owns the schema.
    let inbound: Value =
        serde_json::from_slice(&bytes).map_err(|_| GatewayError::InvalidJson)?;

    gateway::invoke(state.handler.as_ref(), &inbound).await
}
