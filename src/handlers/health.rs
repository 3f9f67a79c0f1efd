use super::json_response;
use crate::config::Config;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::json;

/// Handles the `GET /` health probe. Always succeeds and reports the
/// configured region so a misconfigured environment is visible at a glance.
pub(crate) fn handler(config: &Config) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &json!({
            "status": "AI service is running",
            "aws_region": config.aws_region.as_deref().unwrap_or("Unknown"),
        }),
    )
}
