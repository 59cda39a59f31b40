use std::sync::Arc;

use abuse_ticket_mcp::{
    mcp::{McpServer, http::router},
    tools::{ApiClient, ToolRegistry},
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(base_url: &str) -> axum::Router {
    let registry = ToolRegistry::abuse_tickets(ApiClient::new(base_url).unwrap());
    router(Arc::new(McpServer::new(registry)))
}

fn rpc(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let resp = app("http://127.0.0.1:9")
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");
}

#[tokio::test]
async fn tools_list_over_http() {
    let resp = app("http://127.0.0.1:9")
        .oneshot(rpc(json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply = json_body(resp).await;
    let names: Vec<&str> = reply["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "get_v1_abuse_tickets",
            "get_v1_abuse_tickets_ticketid",
            "post_v1_abuse_tickets"
        ]
    );
}

#[tokio::test]
async fn notification_is_accepted_without_body() {
    let resp = app("http://127.0.0.1:9")
        .oneshot(rpc(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn invalid_json_is_a_parse_error() {
    let resp = app("http://127.0.0.1:9")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .body(Body::from("{\"jsonrpc\":"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["error"]["code"], -32700);
}

#[tokio::test]
async fn tools_call_creates_ticket_end_to_end() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/abuse/tickets"))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"u_number":"T-123"}"#))
        .expect(1)
        .mount(&upstream)
        .await;

    let resp = app(&upstream.uri())
        .oneshot(rpc(json!({
            "jsonrpc": "2.0",
            "id": "call-1",
            "method": "tools/call",
            "params": {
                "name": "post_v1_abuse_tickets",
                "arguments": { "source": "203.0.113.7", "type": "SPAM" }
            }
        })))
        .await
        .unwrap();

    let reply = json_body(resp).await;
    assert_eq!(reply["id"], "call-1");
    assert_eq!(reply["result"]["isError"], false);
    assert_eq!(
        reply["result"]["content"][0]["text"],
        "{\n  \"u_number\": \"T-123\"\n}"
    );
}
