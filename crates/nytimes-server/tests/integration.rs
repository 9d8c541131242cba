use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use nytimes_server::app_state::AppState;

use mock_source::{sample_articles, MockNewsSource};

fn build_test_app(source: MockNewsSource) -> TestServer {
    build_shared_test_app(Arc::new(source))
}

fn build_shared_test_app(source: Arc<MockNewsSource>) -> TestServer {
    let state = AppState::new(source);
    let app = nytimes_server::router::create_router(state);
    TestServer::new(app).unwrap()
}

fn tool_call(id: i64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

fn result_text(body: &Value) -> &str {
    assert_eq!(body["result"]["content"].as_array().unwrap().len(), 1);
    assert_eq!(body["result"]["content"][0]["type"], "text");
    body["result"]["content"][0]["text"].as_str().unwrap()
}

#[tokio::test]
async fn health_check() {
    let server = build_test_app(MockNewsSource::new(vec![]));
    let resp = server.get("/health").await;
    resp.assert_status_ok();
}

#[tokio::test]
async fn initialize_reports_server_info() {
    let server = build_test_app(MockNewsSource::new(vec![]));

    let resp = server
        .post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": { "protocolVersion": "2025-03-26", "capabilities": {} }
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(body["result"]["serverInfo"]["name"], "NYTimes");
    assert!(body["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn notification_is_accepted_without_body() {
    let server = build_test_app(MockNewsSource::new(vec![]));

    let resp = server
        .post("/mcp")
        .json(&json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
        .await;

    resp.assert_status(StatusCode::ACCEPTED);
    assert!(resp.text().is_empty());
}

#[tokio::test]
async fn tools_list_returns_both_tools() {
    let server = build_test_app(MockNewsSource::new(vec![]));

    let resp = server
        .post("/mcp")
        .json(&json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    let names: Vec<&str> = body["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(names, vec!["getLatestNews", "getArticleById"]);
}

#[tokio::test]
async fn latest_news_lists_articles_newest_first() {
    let server = build_test_app(MockNewsSource::new(sample_articles()));

    let resp = server
        .post("/mcp")
        .json(&tool_call(3, "getLatestNews", json!({})))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert!(body.get("error").is_none());

    let text = result_text(&body);
    let blocks: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert_eq!(
        blocks[0],
        "📰 Election Results\nAbout Election Results.\nPublished: 11/6/2024\nURL: https://www.nytimes.com/c3.html\nID: c3\n---"
    );
    assert!(blocks[1].starts_with("📰 Storm Warning\n"));
    assert!(blocks[2].starts_with("📰 Election Preview\n"));
}

#[tokio::test]
async fn latest_news_passes_query() {
    let source = Arc::new(MockNewsSource::new(sample_articles()));
    let server = build_shared_test_app(source.clone());

    let resp = server
        .post("/mcp")
        .json(&tool_call(4, "getLatestNews", json!({ "query": "Election" })))
        .await;

    let body: Value = resp.json();
    let text = result_text(&body);
    assert_eq!(text.matches("📰").count(), 2);
    assert!(!text.contains("Storm Warning"));
    assert_eq!(
        *source.queries.lock().unwrap(),
        vec![Some("Election".to_string())]
    );
}

#[tokio::test]
async fn latest_news_error_status() {
    let server = build_test_app(MockNewsSource::with_status("ERROR"));

    let resp = server
        .post("/mcp")
        .json(&tool_call(5, "getLatestNews", json!({})))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert!(body.get("error").is_none());
    assert_eq!(result_text(&body), "Error fetching news: Failed to fetch news");
}

#[tokio::test]
async fn article_lookup_found() {
    let server = build_test_app(MockNewsSource::new(sample_articles()));

    let resp = server
        .post("/mcp")
        .json(&tool_call(6, "getArticleById", json!({ "id": "b2" })))
        .await;

    let body: Value = resp.json();
    assert_eq!(
        result_text(&body),
        "📰 Storm Warning\n\nAbout Storm Warning.\n\nPublished: 11/5/2024\nURL: https://www.nytimes.com/b2.html"
    );
}

#[tokio::test]
async fn article_lookup_not_found() {
    let server = build_test_app(MockNewsSource::new(sample_articles()));

    let resp = server
        .post("/mcp")
        .json(&tool_call(7, "getArticleById", json!({ "id": "abc123" })))
        .await;

    let body: Value = resp.json();
    assert_eq!(result_text(&body), "Error fetching article: Article not found");
}

#[tokio::test]
async fn offline_upstream_uses_unknown_error() {
    let server = build_test_app(MockNewsSource::offline());

    let resp = server
        .post("/mcp")
        .json(&tool_call(8, "getArticleById", json!({ "id": "abc123" })))
        .await;

    let body: Value = resp.json();
    assert_eq!(result_text(&body), "Error fetching article: Unknown error");
}

#[tokio::test]
async fn unknown_tool_is_invalid_params() {
    let server = build_test_app(MockNewsSource::new(vec![]));

    let resp = server
        .post("/mcp")
        .json(&tool_call(9, "getWeather", json!({})))
        .await;

    let body: Value = resp.json();
    assert!(body.get("result").is_none());
    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["error"]["message"], "Unknown tool: getWeather");
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let server = build_test_app(MockNewsSource::new(vec![]));

    let resp = server
        .post("/mcp")
        .json(&json!({ "jsonrpc": "2.0", "id": 10, "method": "resources/list" }))
        .await;

    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32601);
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = build_test_app(MockNewsSource::new(vec![]));

    let resp = server.post("/mcp").text("{not json").await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32700);
    assert!(body["id"].is_null());
}
