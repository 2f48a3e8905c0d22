use scraper::{ElementRef, Html};

use crate::app::Result;
use crate::domain::TopicContent;
use crate::parser::{element_text, sanitize, selector};

const LINK_PRIMARY: &str = ".topictitle.link > a";
const LINK_FALLBACK: &str = ".topictitle > a";
const HEADING: &str = "h1";
const BODY: &str = "#topic_contents, .topic_contents";
const AUTHOR: &str = ".topicinfo a[href^='/user?id=']";
const POINTS: &str = ".topicinfo span[id^='tp']";
const TIME: &str = ".topicinfo span[title]";

/// External link and title from a topic page header.
///
/// Both are empty when the page has no recognizable title anchor.
pub fn parse_topic_link(html: &str) -> Result<(String, String)> {
    let document = Html::parse_document(html);
    topic_link(&document)
}

/// Title, link, body and byline of a topic page. Missing sections come back empty.
pub fn parse_topic_content(html: &str) -> Result<TopicContent> {
    let document = Html::parse_document(html);
    let (external_link, title) = topic_link(&document)?;

    let body = first(&document, BODY)?
        .map(|el| sanitize(&el.inner_html()))
        .unwrap_or_default();
    let author = first(&document, AUTHOR)?.map(element_text).unwrap_or_default();
    let points = first(&document, POINTS)?.map(element_text).unwrap_or_default();
    let time = first(&document, TIME)?.map(element_text).unwrap_or_default();

    Ok(TopicContent {
        title,
        external_link,
        body,
        author,
        time,
        points,
    })
}

fn first<'a>(document: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(document.select(&sel).next())
}

fn topic_link(document: &Html) -> Result<(String, String)> {
    let heading = selector(HEADING)?;

    for css in [LINK_PRIMARY, LINK_FALLBACK] {
        let sel = selector(css)?;
        let Some(anchor) = document.select(&sel).next() else {
            continue;
        };

        let link = anchor.attr("href").unwrap_or_default().to_string();
        if link.is_empty() {
            continue;
        }

        let title = anchor
            .select(&heading)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| element_text(anchor));

        return Ok((link, title));
    }

    Ok((String::new(), String::new()))
}
