use std::sync::Arc;

use serde_json::Value;

use nytimes_core::error::Error;
use nytimes_core::traits::NewsSource;
use nytimes_core::types::CallResult;

use crate::format;
use crate::tools::{GET_ARTICLE_BY_ID, GET_LATEST_NEWS};

const NEWS_ERROR_PREFIX: &str = "Error fetching news";
const ARTICLE_ERROR_PREFIX: &str = "Error fetching article";
const ARTICLE_NOT_FOUND: &str = "Article not found";

/// The news tools as seen by the MCP host.
///
/// Every call runs validate, fetch, format and always ends in a
/// [`CallResult`]. Failures at any step become a single error text block;
/// nothing is returned to the host as a fault.
#[derive(Clone)]
pub struct NewsTools {
    source: Arc<dyn NewsSource>,
}

impl NewsTools {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    /// Dispatch a `tools/call` by name. Returns `None` for an unknown tool.
    pub async fn call(&self, name: &str, arguments: &Value) -> Option<CallResult> {
        match name {
            GET_LATEST_NEWS => Some(self.get_latest_news(arguments).await),
            GET_ARTICLE_BY_ID => Some(self.get_article_by_id(arguments).await),
            _ => None,
        }
    }

    /// `getLatestNews`: up to five newest articles, optionally filtered.
    pub async fn get_latest_news(&self, arguments: &Value) -> CallResult {
        tracing::info!(tool = GET_LATEST_NEWS, "Tool call");
        match self.latest_news(arguments).await {
            Ok(text) => CallResult::text(text),
            Err(err) => fail_safe(NEWS_ERROR_PREFIX, &err),
        }
    }

    /// `getArticleById`: a single article by its identifier.
    pub async fn get_article_by_id(&self, arguments: &Value) -> CallResult {
        tracing::info!(tool = GET_ARTICLE_BY_ID, "Tool call");
        match self.article_by_id(arguments).await {
            Ok(text) => CallResult::text(text),
            Err(err) => fail_safe(ARTICLE_ERROR_PREFIX, &err),
        }
    }

    async fn latest_news(&self, arguments: &Value) -> Result<String, Error> {
        let query = search_query(arguments)?;
        let reply = self.source.search(query).await?;
        Ok(format::render_search(&format::to_summaries(&reply)))
    }

    async fn article_by_id(&self, arguments: &Value) -> Result<String, Error> {
        let id = article_id(arguments)?;
        let reply = self.source.get_by_id(id).await?;
        let summary = format::to_summary(&reply)
            .ok_or_else(|| Error::Upstream(ARTICLE_NOT_FOUND.to_string()))?;
        Ok(format::render_article(&summary))
    }
}

fn fail_safe(prefix: &str, err: &Error) -> CallResult {
    let message = err.message();
    tracing::warn!("{prefix}: {message}");
    CallResult::text(format!("{prefix}: {message}"))
}

fn argument<'a>(arguments: &'a Value, name: &str) -> Result<Option<&'a Value>, Error> {
    match arguments {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(map.get(name).filter(|v| !v.is_null())),
        _ => Err(Error::Validation("arguments must be an object".to_string())),
    }
}

/// Optional `query`; empty is the same as absent.
fn search_query(arguments: &Value) -> Result<Option<&str>, Error> {
    match argument(arguments, "query")? {
        None => Ok(None),
        Some(Value::String(q)) if q.is_empty() => Ok(None),
        Some(Value::String(q)) => Ok(Some(q.as_str())),
        Some(_) => Err(Error::Validation("query must be a string".to_string())),
    }
}

/// Required, non-empty `id`.
fn article_id(arguments: &Value) -> Result<&str, Error> {
    match argument(arguments, "id")? {
        None => Err(Error::Validation("id is required".to_string())),
        Some(Value::String(id)) if id.is_empty() => Err(Error::Validation(
            "id must be a non-empty string".to_string(),
        )),
        Some(Value::String(id)) => Ok(id.as_str()),
        Some(_) => Err(Error::Validation("id must be a string".to_string())),
    }
}
