use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The error type returned by analysis handlers.
/// Same shape as lambda_runtime::Error so a real lambda crate can slot in.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A local replica of the event API Gateway sends to a lambda over an HTTP integration.
/// Only the fields the analysis handler actually reads are replicated.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayEvent {
    /// The inbound request re-serialized to a JSON string.
    /// The handler expects a string here, not a structured object, and re-parses it itself.
    pub body: String,
    pub is_base64_encoded: bool,
    pub request_context: RequestContext,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestContext {
    pub http: HttpContext,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HttpContext {
    /// Always "POST" in this gateway.
    pub method: String,
}

impl ApiGatewayEvent {
    /// Wraps an already-parsed request body into the event shape the handler expects.
    /// Invariant: parsing `body` back as JSON yields `inbound` exactly.
    pub fn new(inbound: &Value) -> Result<Self, serde_json::Error> {
        Ok(Self {
            body: serde_json::to_string(inbound)?,
            is_base64_encoded: false,
            request_context: RequestContext {
                http: HttpContext {
                    method: "POST".to_owned(),
                },
            },
        })
    }
}

/// Placeholder for the context argument of the handler contract.
/// Carries no request id or deadline - local runs get an empty context.
#[derive(Debug, Default, Serialize)]
pub struct InvocationContext {}

/// The envelope a lambda returns through an HTTP integration.
/// Both fields are optional on the wire: a missing status code means the handler
/// failed to declare success and a missing body stands for an empty JSON object.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// The contract of the externally supplied analysis lambda.
/// The gateway only knows this call shape - what the handler does inside is its own business.
#[async_trait]
pub trait AnalysisHandler: Send + Sync {
    async fn invoke(
        &self,
        event: ApiGatewayEvent,
        ctx: InvocationContext,
    ) -> Result<HandlerResponse, HandlerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_body_round_trips() {
        let inbound = json!({
            "file_name": "contract.pdf",
            "pages": [1, 2, 3],
            "meta": {"uploaded_by": null, "priority": 2},
        });

        let event = ApiGatewayEvent::new(&inbound).expect("failed to build the event");

        assert!(!event.is_base64_encoded);
        assert_eq!(event.request_context.http.method, "POST");

        let parsed: Value = serde_json::from_str(&event.body).expect("event body is not valid JSON");
        assert_eq!(parsed, inbound);
    }

    #[test]
    fn event_uses_gateway_field_names() {
        let event = ApiGatewayEvent::new(&json!({})).unwrap();
        let wire = serde_json::to_value(&event).unwrap();

        assert_eq!(wire["isBase64Encoded"], json!(false));
        assert_eq!(wire["requestContext"]["http"]["method"], json!("POST"));
        assert_eq!(wire["body"], json!("{}"));
    }

    #[test]
    fn handler_response_fields_are_optional() {
        let bare: HandlerResponse = serde_json::from_str("{}").unwrap();
        assert!(bare.status_code.is_none());
        assert!(bare.body.is_none());

        let full: HandlerResponse =
            serde_json::from_str(r#"{"statusCode": 200, "body": "{\"a\":1}"}"#).unwrap();
        assert_eq!(full.status_code, Some(200));
        assert_eq!(full.body.as_deref(), Some(r#"{"a":1}"#));
    }
}
