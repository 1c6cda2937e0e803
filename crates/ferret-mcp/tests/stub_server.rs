//! Integration tests for `McpClient` against a stub MCP server

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Map, Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ferret_mcp::{McpClient, McpClientConfig, McpError};

/// One request as seen by the stub server
#[derive(Debug, Clone)]
struct Recorded {
    body: Value,
    authorization: Option<String>,
}

#[derive(Clone)]
struct Stub {
    requests: Arc<Mutex<Vec<Recorded>>>,
    status: StatusCode,
    reply: Arc<Value>,
    /// Raw non-JSON body instead of `reply`, when set
    raw_reply: Option<&'static str>,
    delay: Option<Duration>,
}

impl Stub {
    fn replying(status: StatusCode, reply: Value) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
            reply: Arc::new(reply),
            raw_reply: None,
            delay: None,
        }
    }
}

async fn handle(State(stub): State<Stub>, headers: HeaderMap, body: String) -> Response {
    let recorded = Recorded {
        body: serde_json::from_str(&body).expect("stub received invalid JSON"),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    stub.requests.lock().unwrap().push(recorded);

    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }

    match stub.raw_reply {
        Some(raw) => (stub.status, raw.to_string()).into_response(),
        None => (stub.status, axum::Json(stub.reply.as_ref().clone())).into_response(),
    }
}

/// Serve the stub on an ephemeral port, returning its base URL
async fn spawn_stub(stub: Stub) -> String {
    let app = Router::new()
        .route("/mcp/v1/call", post(handle))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn args(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[tokio::test]
async fn search_result_round_trips_verbatim() {
    let stub = Stub::replying(
        StatusCode::OK,
        json!({"jsonrpc": "2.0", "result": {"results": [], "total": 0}}),
    );
    let requests = stub.requests.clone();
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    let result = client
        .call_tool(
            "confluence_search",
            args(&[("query", json!("deployment")), ("limit", json!(5))]),
        )
        .await
        .unwrap();

    assert_eq!(result["total"], 0);
    assert!(result["results"].as_array().unwrap().is_empty());

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    let body = &recorded[0].body;
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["method"], "tools/call");
    assert_eq!(body["params"]["name"], "confluence_search");
    assert_eq!(body["params"]["arguments"]["query"], "deployment");
    assert_eq!(body["params"]["arguments"]["limit"], 5);
}

#[tokio::test]
async fn error_body_maps_to_protocol_error() {
    let stub = Stub::replying(
        StatusCode::OK,
        json!({"jsonrpc": "2.0", "error": {"code": 404, "message": "not found"}}),
    );
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    let err = client
        .call_tool("confluence_get_page", args(&[("pageId", json!("123"))]))
        .await
        .unwrap_err();

    match err {
        McpError::Protocol { code, message } => {
            assert_eq!(code, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("expected Protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_body_wins_over_http_status() {
    // A non-2xx reply that still carries a JSON-RPC error object must be
    // surfaced as a protocol rejection, not a transport failure.
    let stub = Stub::replying(
        StatusCode::BAD_REQUEST,
        json!({"jsonrpc": "2.0", "error": {"code": -32602, "message": "invalid params"}}),
    );
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    let err = client.call_tool("confluence_search", Map::new()).await.unwrap_err();
    assert_eq!(err.protocol_code(), Some(-32602));
}

#[tokio::test]
async fn non_2xx_without_error_body_is_transport() {
    let mut stub = Stub::replying(StatusCode::INTERNAL_SERVER_ERROR, Value::Null);
    stub.raw_reply = Some("upstream exploded");
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    let err = client.call_tool("confluence_search", Map::new()).await.unwrap_err();
    match err {
        McpError::Transport(msg) => assert!(msg.contains("500")),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_result_yields_empty_map() {
    let stub = Stub::replying(StatusCode::OK, json!({"jsonrpc": "2.0"}));
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    let result = client.list_spaces().await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn consecutive_calls_use_distinct_request_ids() {
    let stub = Stub::replying(StatusCode::OK, json!({"jsonrpc": "2.0", "result": {}}));
    let requests = stub.requests.clone();
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    client
        .call_tool("confluence_search", args(&[("query", json!("a"))]))
        .await
        .unwrap();
    client
        .call_tool("confluence_search", args(&[("query", json!("b"))]))
        .await
        .unwrap();

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    let first = recorded[0].body["id"].as_str().unwrap();
    let second = recorded[1].body["id"].as_str().unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn bearer_token_sent_only_when_configured() {
    let stub = Stub::replying(StatusCode::OK, json!({"jsonrpc": "2.0", "result": {}}));
    let requests = stub.requests.clone();
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url).with_token("sekrit")).unwrap();
    client.list_spaces().await.unwrap();

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    client.list_spaces().await.unwrap();

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer sekrit"));
    assert_eq!(recorded[1].authorization, None);
}

#[tokio::test]
async fn optional_space_key_is_omitted_not_null() {
    let stub = Stub::replying(StatusCode::OK, json!({"jsonrpc": "2.0", "result": {}}));
    let requests = stub.requests.clone();
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    client.search_content("deployment", None, 5).await.unwrap();
    client
        .search_content("deployment", Some("ENG"), 5)
        .await
        .unwrap();
    client
        .get_page_by_title("Release Process", None)
        .await
        .unwrap();

    let recorded = requests.lock().unwrap();

    let without = &recorded[0].body["params"]["arguments"];
    assert_eq!(without["query"], "deployment");
    assert_eq!(without["limit"], 5);
    assert!(without.get("spaceKey").is_none());

    let with = &recorded[1].body["params"]["arguments"];
    assert_eq!(with["spaceKey"], "ENG");

    let by_title = &recorded[2].body;
    assert_eq!(by_title["params"]["name"], "confluence_get_page_by_title");
    assert_eq!(by_title["params"]["arguments"]["title"], "Release Process");
    assert!(
        by_title["params"]["arguments"].get("spaceKey").is_none()
    );
}

#[tokio::test]
async fn closed_client_performs_no_network_io() {
    let stub = Stub::replying(StatusCode::OK, json!({"jsonrpc": "2.0", "result": {}}));
    let requests = stub.requests.clone();
    let url = spawn_stub(stub).await;

    let client = McpClient::new(McpClientConfig::new(&url)).unwrap();
    client.close();

    let err = client.call_tool("confluence_search", Map::new()).await.unwrap_err();
    assert!(matches!(err, McpError::Closed));
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_server_fails_within_timeout() {
    // Port 1 refuses connections immediately; either way the call must come
    // back as a transport failure well inside the configured timeout.
    let config = McpClientConfig::new("http://127.0.0.1:1")
        .with_timeout(Duration::from_secs(2));
    let client = McpClient::new(config).unwrap();

    let started = tokio::time::Instant::now();
    let err = client.call_tool("confluence_search", Map::new()).await.unwrap_err();
    assert!(matches!(err, McpError::Transport(_)));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn slow_server_hits_client_timeout() {
    let mut stub = Stub::replying(StatusCode::OK, json!({"jsonrpc": "2.0", "result": {}}));
    stub.delay = Some(Duration::from_secs(5));
    let url = spawn_stub(stub).await;

    let config = McpClientConfig::new(&url).with_timeout(Duration::from_millis(300));
    let client = McpClient::new(config).unwrap();

    let err = client.call_tool("confluence_search", Map::new()).await.unwrap_err();
    assert!(matches!(err, McpError::Transport(_)));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let stub = Stub::replying(StatusCode::OK, json!({"jsonrpc": "2.0", "result": {"ok": true}}));
    let requests = stub.requests.clone();
    let url = spawn_stub(stub).await;

    let client = Arc::new(McpClient::new(McpClientConfig::new(&url)).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .call_tool("confluence_search", args(&[("query", json!(i))]))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result["ok"], true);
    }
    assert_eq!(requests.lock().unwrap().len(), 4);
}
