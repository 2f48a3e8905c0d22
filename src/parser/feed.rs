use feed_rs::parser;
use html_escape::decode_html_entities;
use tracing::debug;

use crate::app::{GnError, Result};
use crate::domain::Article;

/// Parse the site's Atom feed into articles, in feed order.
///
/// Feed entries only point at topic pages, so `link` stays empty and the
/// topic URL lands in `comments_link`. Every article gets `domain`.
pub fn parse_feed(body: &[u8], domain: &str) -> Result<Vec<Article>> {
    let feed = parser::parse(body).map_err(|e| GnError::FeedParse(e.to_string()))?;

    let articles: Vec<Article> = feed
        .entries
        .into_iter()
        .map(|entry| {
            let topic_url = entry
                .links
                .iter()
                .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
                .map(|l| l.href.clone())
                .filter(|href| !href.is_empty())
                .unwrap_or(entry.id);

            Article {
                title: entry
                    .title
                    .map(|t| decode_html_entities(&t.content).trim().to_string())
                    .unwrap_or_default(),
                link: String::new(),
                comments: String::new(),
                comments_link: topic_url,
                domain: domain.to_string(),
            }
        })
        .collect();

    debug!("Parsed {} articles from feed", articles.len());
    Ok(articles)
}
