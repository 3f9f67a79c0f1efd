use crate::types::{AnalysisHandler, ApiGatewayEvent, HandlerError, InvocationContext};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

/// Everything that can go wrong between receiving a request body and
/// producing the handler's decoded payload.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The inbound request body could not be parsed as JSON.
    #[error("Invalid JSON format")]
    InvalidJson,
    /// The handler ran and reported a non-200 status.
    /// `detail` is the raw body string, passed through verbatim.
    #[error("{detail}")]
    HandlerRejected { status: u16, detail: String },
    /// A serialization failure, including a success body that is not valid JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// The handler itself returned an error instead of an envelope.
    #[error("{0}")]
    Handler(HandlerError),
    /// Transport-level failures while reading the request.
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// The HTTP status code the error maps to.
    pub fn status(&self) -> u16 {
        match self {
            GatewayError::InvalidJson => 400,
            GatewayError::HandlerRejected { status, .. } => *status,
            GatewayError::Json(_) | GatewayError::Handler(_) | GatewayError::Internal(_) => 500,
        }
    }
}

/// Wraps the inbound request into the event shape the handler expects,
/// invokes the handler and unwraps its `{statusCode, body}` envelope.
///
/// On a 200 the body string is parsed back into JSON and returned as the
/// result payload. On any other status the body is surfaced verbatim as the
/// error detail - handler error bodies are not expected to be well-formed
/// success payloads and are never parsed.
pub async fn invoke(handler: &dyn AnalysisHandler, inbound: &Value) -> Result<Value, GatewayError> {
    let file_name = inbound
        .get("file_name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown File");
    info!("Processing file: {file_name}");

    // The handler's own body parsing expects a JSON string, not a structured
    // object, so the already-parsed request is serialized back into a string.
    let event = ApiGatewayEvent::new(inbound)?;
    let context = InvocationContext::default();

    // No timeout of our own: if the handler hangs on its backend, the request hangs.
    let response = handler
        .invoke(event, context)
        .await
        .map_err(GatewayError::Handler)?;

    // A handler that did not declare a status did not succeed.
    let status = response.status_code.unwrap_or(500);
    let body = response.body.unwrap_or_else(|| "{}".to_owned());

    if status == 200 {
        Ok(serde_json::from_str(&body)?)
    } else {
        error!("Handler error: {body}");
        Err(GatewayError::HandlerRejected {
            status,
            detail: body,
        })
    }
}
