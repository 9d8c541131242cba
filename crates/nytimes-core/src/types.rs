use serde::{Deserialize, Deserializer, Serialize};

/// Status value the upstream API uses for a successful response.
pub const STATUS_OK: &str = "OK";

/// Treat an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Headline block of an upstream article record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    #[serde(default, deserialize_with = "nullable")]
    pub main: String,
}

/// A raw article record as returned by the article search API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "nullable")]
    pub headline: Headline,
    #[serde(rename = "abstract", default, deserialize_with = "nullable")]
    pub abstract_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub web_url: String,
    #[serde(rename = "_id", default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub pub_date: String,
}

/// The `response` object of an upstream reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub docs: Option<Vec<Article>>,
}

/// Parsed body of an article search reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default)]
    pub response: Option<ResponseBody>,
}

impl UpstreamResponse {
    /// Build an OK response carrying the given records.
    #[must_use]
    pub fn ok(docs: Vec<Article>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            response: Some(ResponseBody { docs: Some(docs) }),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The result list, if the reply carried one.
    #[must_use]
    pub fn docs(&self) -> Option<&[Article]> {
        self.response.as_ref()?.docs.as_deref()
    }
}

/// Display-ready view of one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub url: String,
    pub id: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
}

/// One block of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// Result envelope returned to the tool host for every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallResult {
    pub content: Vec<ContentBlock>,
}

impl CallResult {
    /// A result holding a single text block.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Concatenated text of all blocks.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .map(|block| match block {
                ContentBlock::Text { text } => text.as_str(),
            })
            .collect()
    }
}
