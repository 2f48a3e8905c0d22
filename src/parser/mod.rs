//! Extraction of typed records from the site's feed and topic pages.
//!
//! ```text
//! feed bytes ─▶ parse_feed ─▶ Vec<Article>
//! topic html ─▶ parse_topic_content / parse_topic_link / parse_comments
//! ```

pub mod comments;
pub mod feed;
pub mod sanitize;
pub mod topic;

pub use comments::parse_comments;
pub use feed::parse_feed;
pub use sanitize::sanitize;
pub use topic::{parse_topic_content, parse_topic_link};

use scraper::{ElementRef, Selector};

use crate::app::{GnError, Result};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| GnError::HtmlParse(format!("invalid selector {css:?}: {e}")))
}

/// Concatenated text of an element, trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
