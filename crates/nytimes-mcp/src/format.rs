//! Turns upstream replies into the text shown to the tool host.
//!
//! Everything here is a pure function of the parsed reply and the host's
//! timezone, so the same reply always renders to the same bytes on a given
//! host. Upstream text is included verbatim.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use nytimes_core::types::{Article, ArticleSummary, UpstreamResponse};

/// Maximum number of articles shown by a search.
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Rendered in place of a publish date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const SEPARATOR: &str = "\n\n";

/// Summaries of the first [`MAX_SEARCH_RESULTS`] articles, in upstream order.
#[must_use]
pub fn to_summaries(reply: &UpstreamResponse) -> Vec<ArticleSummary> {
    reply
        .docs()
        .unwrap_or_default()
        .iter()
        .take(MAX_SEARCH_RESULTS)
        .map(summarize)
        .collect()
}

/// Summary of the first article in the reply, if any.
#[must_use]
pub fn to_summary(reply: &UpstreamResponse) -> Option<ArticleSummary> {
    reply.docs()?.first().map(summarize)
}

fn summarize(article: &Article) -> ArticleSummary {
    ArticleSummary {
        title: article.headline.main.clone(),
        abstract_text: article.abstract_text.clone(),
        url: article.web_url.clone(),
        id: article.id.clone(),
        publish_date: format_date(&article.pub_date),
    }
}

/// Render an upstream timestamp as a US short date (`M/D/YYYY`).
///
/// Accepts RFC 3339, the API's `+0000` offset form, offset-less timestamps
/// (read as local time) and bare dates (read as UTC midnight). The calendar
/// date is taken in the host's local timezone.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_date(raw).map_or_else(
        || INVALID_DATE.to_string(),
        |date| date.format("%-m/%-d/%Y").to_string(),
    )
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().with_timezone(&Local).date_naive())
}

/// Render search results, one block per article, separated by blank lines.
#[must_use]
pub fn render_search(summaries: &[ArticleSummary]) -> String {
    summaries
        .iter()
        .map(|s| {
            format!(
                "📰 {}\n{}\nPublished: {}\nURL: {}\nID: {}\n---",
                s.title, s.abstract_text, s.publish_date, s.url, s.id
            )
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Render a single looked-up article. The identifier is not repeated.
#[must_use]
pub fn render_article(summary: &ArticleSummary) -> String {
    format!(
        "📰 {}\n\n{}\n\nPublished: {}\nURL: {}",
        summary.title, summary.abstract_text, summary.publish_date, summary.url
    )
}
