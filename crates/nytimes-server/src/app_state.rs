use std::sync::Arc;

use nytimes_core::traits::NewsSource;
use nytimes_mcp::NewsTools;

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub tools: NewsTools,
}

impl AppState {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self {
            tools: NewsTools::new(source),
        }
    }
}
