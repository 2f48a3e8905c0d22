//! Readable-text extraction for external article pages.
//!
//! ```text
//! article url ─▶ Fetcher ─▶ strip clutter ─▶ pick content element ─▶ sanitize
//! ```
//!
//! The result is plain text with blank-line separated paragraphs, ready for
//! [`crate::render::format_paragraphs`].

mod config;

pub use config::ExtractorConfig;

use std::sync::Arc;

use async_trait::async_trait;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::app::{GnError, Result};
use crate::fetcher::Fetcher;
use crate::parser::{sanitize, selector};

/// Turns an article URL into its readable text.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<String>;
}

/// Extractor that downloads the page and picks its main content with CSS selectors.
pub struct HtmlExtractor {
    fetcher: Arc<dyn Fetcher>,
    config: ExtractorConfig,
}

impl HtmlExtractor {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: ExtractorConfig) -> Self {
        Self { fetcher, config }
    }
}

#[async_trait]
impl Extractor for HtmlExtractor {
    async fn extract(&self, url: &str) -> Result<String> {
        let html = self.fetcher.fetch_text(url).await?;
        extract_text(&html, &self.config)
    }
}

/// Extract the readable text of an HTML page.
///
/// Elements matching `remove_selectors` are dropped first. The first
/// `content_selectors` match holding at least `min_content_length` characters
/// of text wins; otherwise the whole `<body>` is used.
pub fn extract_text(html: &str, config: &ExtractorConfig) -> Result<String> {
    let mut document = Html::parse_document(html);

    for css in &config.remove_selectors {
        let sel = selector(css)?;
        let ids: Vec<_> = document.root_element().select(&sel).map(|el| el.id()).collect();
        for id in ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }

    let content = find_content(&document, config)?;
    let Some(element) = content else {
        return Err(GnError::NotFound("article content".into()));
    };

    let text = sanitize(&element.inner_html());
    if text.is_empty() {
        return Err(GnError::NotFound("article content".into()));
    }
    Ok(text)
}

// Detached nodes stay in the arena, so searches start from the root element.
fn find_content<'a>(document: &'a Html, config: &ExtractorConfig) -> Result<Option<ElementRef<'a>>> {
    let root = document.root_element();

    for css in &config.content_selectors {
        let sel = selector(css)?;
        if let Some(element) = root.select(&sel).next() {
            let length = element.text().collect::<String>().trim().chars().count();
            if length >= config.min_content_length {
                debug!("article content matched {:?} ({} chars)", css, length);
                return Ok(Some(element));
            }
        }
    }

    debug!("no content selector matched, falling back to body");
    Ok(root.select(&selector("body")?).next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ErrorKind;
    use crate::fetcher::testing::FakeFetcher;

    const ARTICLE: &str = include_str!("../../testdata/external_article.html");

    #[test]
    fn test_picks_article_and_drops_clutter() {
        let text = extract_text(ARTICLE, &ExtractorConfig::default()).unwrap();

        let heading = text.lines().next().unwrap();
        assert!(heading.ends_with("How AI assistance impacts the formation of coding skills"));
        assert!(text.contains("randomized controlled trial"));
        assert!(text.contains("debugging questions."));
        for clutter in ["Buy things", "Share this", "trackPageView", "Home", "Copyright"] {
            assert!(!text.contains(clutter), "unexpected {clutter:?} in {text:?}");
        }
    }

    #[test]
    fn test_paragraphs_are_blank_line_separated() {
        let text = extract_text(ARTICLE, &ExtractorConfig::default()).unwrap();
        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert!(paragraphs.len() >= 3);
    }

    #[test]
    fn test_short_match_falls_back_to_body() {
        let html = "<html><body><article>tiny</article><p>outside the article</p></body></html>";
        let text = extract_text(html, &ExtractorConfig::default()).unwrap();

        assert!(text.contains("tiny"));
        assert!(text.contains("outside the article"));
    }

    #[test]
    fn test_empty_page_is_not_found() {
        let err = extract_text("<html><body>  </body></html>", &ExtractorConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_bad_selector_is_a_parse_error() {
        let config = ExtractorConfig {
            remove_selectors: vec!["[[".into()],
            ..ExtractorConfig::default()
        };
        let err = extract_text(ARTICLE, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_extract_through_fetcher() {
        let url = "https://www.anthropic.com/research/AI-assistance-coding-skills";
        let fetcher = FakeFetcher::default().with_page(url, ARTICLE);
        let extractor = HtmlExtractor::new(Arc::new(fetcher), ExtractorConfig::default());

        let text = extractor.extract(url).await.unwrap();
        assert!(text.contains("randomized controlled trial"));

        let err = extractor.extract("https://missing.example").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}
