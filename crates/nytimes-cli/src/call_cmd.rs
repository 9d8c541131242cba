use reqwest::Client;
use serde_json::Value;

/// Send one JSON-RPC request to the server's `/mcp` endpoint and return its
/// `result`.
pub async fn rpc(server_url: &str, method: &str, params: Value) -> anyhow::Result<Value> {
    let client = Client::new();

    tracing::debug!("{method} -> {server_url}/mcp");
    let resp = client
        .post(format!("{server_url}/mcp"))
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        }))
        .send()
        .await?;

    if !resp.status().is_success() {
        let body = resp.text().await?;
        anyhow::bail!("Request failed: {body}");
    }

    let mut body: Value = resp.json().await?;
    if let Some(error) = body.get("error") {
        anyhow::bail!("Server error: {}", serde_json::to_string_pretty(error)?);
    }

    Ok(body.get_mut("result").map(Value::take).unwrap_or_default())
}

/// Call a tool and return the text of its result.
pub async fn call_tool(server_url: &str, name: &str, arguments: Value) -> anyhow::Result<String> {
    let result = rpc(
        server_url,
        "tools/call",
        serde_json::json!({ "name": name, "arguments": arguments }),
    )
    .await?;

    Ok(content_text(&result))
}

/// Join the text blocks of a tool result.
fn content_text(result: &Value) -> String {
    result["content"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|block| block["type"] == "text")
        .filter_map(|block| block["text"].as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
