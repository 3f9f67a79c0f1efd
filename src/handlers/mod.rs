use crate::config::Config;
use crate::types::AnalysisHandler;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

pub(crate) mod analyze;
pub(crate) mod health;

/// Everything a request handler needs, created once at startup.
pub struct AppState {
    pub config: Config,
    pub handler: Arc<dyn AnalysisHandler>,
}

/// Routes a single request to its handler.
/// Generic over the body type so tests can drive it without a live connection.
pub async fn route<B>(req: Request<B>, state: Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body + Unpin,
    B::Error: fmt::Display,
{
    if req.method() == Method::GET && req.uri().path() == "/" {
        return health::handler(&state.config);
    }

    if req.method() == Method::POST && req.uri().path() == "/contracts/analyze" {
        return analyze::handler(req, state.as_ref()).await;
    }

    // no other routes are exposed - anything else is a stray request
    warn!("Unknown request: {} {}", req.method(), req.uri().path());
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

/// A response with the JSON encoding of `payload` in the body.
pub(crate) fn json_response(status: StatusCode, payload: &serde_json::Value) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(payload.to_string())))
        .expect("Failed to create a response")
}

/// An error response in the `{"detail": ...}` shape the backend expects.
pub(crate) fn error_response(status: StatusCode, detail: &str) -> Response<Full<Bytes>> {
    json_response(status, &json!({ "detail": detail }))
}
