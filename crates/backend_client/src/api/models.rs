//! Wire types for the backend query endpoint
//!
//! The shapes are fixed and compatibility-sensitive; do not rename
//! fields.

use serde::{Deserialize, Serialize};

/// Request body for the query endpoint.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QueryRequest {
    /// Trimmed user text.
    pub query: String,
    /// Caller-supplied identity string; opaque to this client.
    pub user_id: String,
}

/// Response body from the query endpoint. Any field other than
/// `response` is ignored.
#[derive(Deserialize, Clone, Debug)]
pub struct QueryResponse {
    /// Raw answer text, before post-processing.
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = QueryRequest {
            query: "hello".to_string(),
            user_id: "alice".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query": "hello", "user_id": "alice"})
        );
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let body = r#"{"response": "hi", "latency_ms": 42}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "hi");
    }

    #[test]
    fn test_response_requires_response_field() {
        let body = r#"{"answer": "hi"}"#;
        assert!(serde_json::from_str::<QueryResponse>(body).is_err());
    }
}
