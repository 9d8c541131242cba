use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;
use crate::dispatch;

/// Handle one MCP JSON-RPC message posted by the host.
///
/// Requests get their JSON-RPC response in the body; notifications get
/// `202 Accepted` with no body.
pub async fn mcp_request(State(state): State<AppState>, body: String) -> Response {
    let req = match dispatch::parse_message(&body) {
        Ok(req) => req,
        Err(resp) => return Json(resp).into_response(),
    };

    match dispatch::handle_request(&state.tools, req).await {
        Some(resp) => Json(resp).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
