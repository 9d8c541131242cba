/// Default root of the NYTimes API.
pub const DEFAULT_BASE_URL: &str = "https://api.nytimes.com/svc";

/// Connection settings for the upstream news API.
///
/// Built once at startup and handed to the client; nothing reads the
/// environment after that.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
}

impl UpstreamConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of the article search endpoint.
    #[must_use]
    pub fn article_search_url(&self) -> String {
        format!(
            "{}/search/v2/articlesearch.json",
            self.base_url.trim_end_matches('/')
        )
    }
}

// Keep the key out of debug output and logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_url() {
        let config = UpstreamConfig::new("key");
        assert_eq!(
            config.article_search_url(),
            "https://api.nytimes.com/svc/search/v2/articlesearch.json"
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let config = UpstreamConfig::new("key").with_base_url("http://127.0.0.1:9999/");
        assert_eq!(
            config.article_search_url(),
            "http://127.0.0.1:9999/search/v2/articlesearch.json"
        );
    }

    #[test]
    fn debug_redacts_key() {
        let config = UpstreamConfig::new("secret-key");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("redacted"));
    }
}
