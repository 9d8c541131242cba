use async_trait::async_trait;

use crate::error::Error;
use crate::types::UpstreamResponse;

/// Source of news articles (the upstream search API).
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Search for the most recent articles, optionally filtered by a free-text
    /// term. `None` and `Some("")` both mean "no filter".
    ///
    /// Fails with [`Error::Upstream`] unless the response is OK and carries a
    /// result list.
    async fn search(&self, query: Option<&str>) -> Result<UpstreamResponse, Error>;

    /// Look up a single article by its identifier.
    ///
    /// Fails with [`Error::Upstream`] unless the response is OK and carries at
    /// least one result.
    async fn get_by_id(&self, id: &str) -> Result<UpstreamResponse, Error>;
}
