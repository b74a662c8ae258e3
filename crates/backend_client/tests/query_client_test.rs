//! Integration tests for HttpQueryClient against a mock backend

use backend_client::{BackendError, HttpQueryClient, QueryClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpQueryClient {
    HttpQueryClient::new(format!("{}/query", server.uri()))
}

/// The fixed wire contract: POST, JSON content type, query + user_id
/// body, `response` field extracted from the reply.
#[tokio::test]
async fn test_query_posts_json_and_returns_response_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "query": "what is rust?",
            "user_id": "alice",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "what is rust? A systems language.",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let answer = client
        .query("what is rust?", "alice")
        .await
        .expect("query succeeds");
    assert_eq!(answer, "what is rust? A systems language.");
}

#[tokio::test]
async fn test_extra_response_fields_are_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "hi",
            "model": "qa-v2",
            "latency_ms": 17,
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let answer = client.query("hello", "alice").await.expect("query succeeds");
    assert_eq!(answer, "hi");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.query("hello", "alice").await.expect_err("500 maps to error");
    match err {
        BackendError::Status { status } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.query("hello", "alice").await.expect_err("garbage body");
    assert!(matches!(err, BackendError::MalformedBody(_)));
}

#[tokio::test]
async fn test_missing_response_field_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "wrong shape",
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.query("hello", "alice").await.expect_err("missing field");
    assert!(matches!(err, BackendError::MalformedBody(_)));
}

#[tokio::test]
async fn test_connection_refused_is_a_request_error() {
    // Nothing is listening on this port.
    let client = HttpQueryClient::new("http://127.0.0.1:9/query");
    let err = client.query("hello", "alice").await.expect_err("no listener");
    assert!(matches!(err, BackendError::Request(_)));
}
