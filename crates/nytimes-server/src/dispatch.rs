use serde_json::Value;

use nytimes_mcp::jsonrpc::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use nytimes_mcp::{JsonRpcRequest, JsonRpcResponse, NewsTools, ToolRegistry};

const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "NYTimes";

/// Decode one raw JSON-RPC message.
///
/// On failure, returns the error response to send back: `PARSE_ERROR` for
/// invalid JSON, `INVALID_REQUEST` for JSON that is not a request.
pub fn parse_message(raw: &str) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        tracing::warn!("Unparseable MCP message: {e}");
        JsonRpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {e}"))
    })?;

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| {
        tracing::warn!("Invalid MCP request: {e}");
        JsonRpcResponse::error(id, INVALID_REQUEST, format!("Invalid request: {e}"))
    })
}

/// Process one MCP request. Returns `None` for notifications.
pub async fn handle_request(tools: &NewsTools, req: JsonRpcRequest) -> Option<JsonRpcResponse> {
    // Notifications (no id) never get a response
    if req.is_notification() {
        tracing::info!("Received MCP notification: {}", req.method);
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "ping" => JsonRpcResponse::success(req.id.clone(), serde_json::json!({})),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tools_call(tools, &req).await,
        _ => JsonRpcResponse::error(req.id.clone(), METHOD_NOT_FOUND, "Method not found"),
    };

    Some(response)
}

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    let protocol_version = req
        .params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = ToolRegistry::definitions();
    JsonRpcResponse::success(req.id.clone(), serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(tools: &NewsTools, req: &JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = &req.params else {
        return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing params");
    };

    let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing tool name");
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()));

    let Some(result) = tools.call(tool_name, &arguments).await else {
        return JsonRpcResponse::error(
            req.id.clone(),
            INVALID_PARAMS,
            format!("Unknown tool: {tool_name}"),
        );
    };

    JsonRpcResponse::tool_result(req.id.clone(), &result)
}
