use crate::types::{
    AnalysisHandler, ApiGatewayEvent, HandlerError, HandlerResponse, InvocationContext,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

/// A stand-in for the real analysis lambda, wired into the binary until the
/// AI team's crate is linked in. It exercises the full handler contract:
/// re-parses the string body the same way the real handler does on AWS and
/// returns a well-formed 200 envelope.
pub struct SampleAnalyzer;

#[async_trait]
impl AnalysisHandler for SampleAnalyzer {
    async fn invoke(
        &self,
        event: ApiGatewayEvent,
        _ctx: InvocationContext,
    ) -> Result<HandlerResponse, HandlerError> {
        // The gateway delivers the request as a JSON string, same as on AWS.
        let request: Value = serde_json::from_str(&event.body)?;

        let file_name = request
            .get("file_name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown File");
        info!("Sample analyzer invoked for: {file_name}");

        let body = json!({
            "file_name": file_name,
            "analysis": "No findings. This is the built-in sample analyzer.",
        })
        .to_string();

        Ok(HandlerResponse {
            status_code: Some(200),
            body: Some(body),
        })
    }
}
