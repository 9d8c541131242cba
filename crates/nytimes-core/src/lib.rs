pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::UpstreamConfig;
pub use error::Error;
pub use traits::NewsSource;
pub use types::{Article, ArticleSummary, CallResult, ContentBlock, UpstreamResponse};
