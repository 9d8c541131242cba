use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool name for the latest-news search.
pub const GET_LATEST_NEWS: &str = "getLatestNews";
/// Tool name for the single-article lookup.
pub const GET_ARTICLE_BY_ID: &str = "getArticleById";

/// Definition of an MCP tool exposed to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Registry of the news tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the MCP `tools/list` method.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: GET_LATEST_NEWS.to_string(),
                description: "Get the five most recent NY Times articles, optionally filtered by a search term.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Optional search term"
                        }
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: GET_ARTICLE_BY_ID.to_string(),
                description: "Get a single NY Times article by its ID.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Article ID from NY Times"
                        }
                    },
                    "required": ["id"]
                }),
            },
        ]
    }
}
