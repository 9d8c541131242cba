use async_trait::async_trait;
use reqwest::Client;

use nytimes_core::error::Error;
use nytimes_core::traits::NewsSource;
use nytimes_core::types::UpstreamResponse;
use nytimes_core::UpstreamConfig;

const SEARCH_FAILED: &str = "Failed to fetch news";
const ARTICLE_NOT_FOUND: &str = "Article not found";

/// HTTP client for the NYTimes article search API.
#[derive(Clone)]
pub struct NytClient {
    http: Client,
    config: UpstreamConfig,
}

impl NytClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a caller-provided reqwest client (shared connection settings, proxies).
    pub fn with_client(http: Client, config: UpstreamConfig) -> Self {
        Self { http, config }
    }

    /// Issue one GET against the search endpoint and decode the body.
    ///
    /// The HTTP status is not inspected: error replies from the API still
    /// decode, and are rejected by their `status` field.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<UpstreamResponse, Error> {
        let url = self.config.article_search_url();
        tracing::debug!(%url, ?params, "Querying article search");

        let mut query = Vec::with_capacity(params.len() + 1);
        query.push(("api-key", self.config.api_key.as_str()));
        query.extend_from_slice(params);

        let resp = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        resp.json::<UpstreamResponse>()
            .await
            .map_err(transport_error)
    }
}

// The request URL carries the API key, so it never goes into the message.
fn transport_error(err: reqwest::Error) -> Error {
    let err = err.without_url();
    tracing::warn!("Article search request failed: {err}");
    Error::Transport(err.to_string())
}

#[async_trait]
impl NewsSource for NytClient {
    async fn search(&self, query: Option<&str>) -> Result<UpstreamResponse, Error> {
        let mut params = Vec::with_capacity(2);
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            params.push(("q", q));
        }
        params.push(("sort", "newest"));

        let reply = self.fetch(&params).await?;
        if !reply.is_ok() || reply.docs().is_none() {
            tracing::warn!(status = %reply.status, "Article search returned no result list");
            return Err(Error::Upstream(SEARCH_FAILED.to_string()));
        }
        Ok(reply)
    }

    async fn get_by_id(&self, id: &str) -> Result<UpstreamResponse, Error> {
        let filter = format!("_id:\"{id}\"");
        let reply = self.fetch(&[("fq", filter.as_str())]).await?;

        if !reply.is_ok() || reply.docs().map_or(true, <[_]>::is_empty) {
            tracing::warn!(status = %reply.status, %id, "Article lookup found nothing");
            return Err(Error::Upstream(ARTICLE_NOT_FOUND.to_string()));
        }
        Ok(reply)
    }
}
