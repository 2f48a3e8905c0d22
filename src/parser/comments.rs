use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use tracing::debug;

use crate::app::Result;
use crate::domain::Comment;
use crate::parser::{element_text, sanitize, selector};

const ROW: &str = "#comment_thread .comment_row";
const AUTHOR: &str = ".commentinfo a[href^='/user?id=']";
const TIME: &str = ".commentinfo a[href^='comment?id=']";
const BODY: &str = ".commentTD .comment_contents";
const ID_PREFIX: &str = "cid";

static DEPTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--depth:\s*(\d+)").expect("valid depth regex"));

/// Parse a topic page's comment thread, in document (depth-first) order.
///
/// Depth comes from the row's `--depth: N` style; rows without one are top
/// level. A depth too large to represent counts as infinitely deep. Rows nested deeper than `max_depth` are left out entirely.
pub fn parse_comments(html: &str, max_depth: usize) -> Result<Vec<Comment>> {
    let document = Html::parse_document(html);

    let row_sel = selector(ROW)?;
    let author_sel = selector(AUTHOR)?;
    let time_sel = selector(TIME)?;
    let body_sel = selector(BODY)?;

    let mut comments = Vec::new();
    let mut skipped = 0;

    for row in document.select(&row_sel) {
        let depth = row
            .attr("style")
            .and_then(|style| DEPTH_RE.captures(style))
            .map(|caps| caps[1].parse::<usize>().unwrap_or(usize::MAX))
            .unwrap_or(0);

        if depth > max_depth {
            skipped += 1;
            continue;
        }

        let author = row.select(&author_sel).next().map(element_text).unwrap_or_default();
        let time = row
            .select(&time_sel)
            .map(element_text)
            .collect::<Vec<_>>()
            .join("");
        let id = row
            .attr("id")
            .map(|id| id.strip_prefix(ID_PREFIX).unwrap_or(id).to_string())
            .unwrap_or_default();
        let body = row
            .select(&body_sel)
            .next()
            .map(|el| sanitize(&el.inner_html()))
            .unwrap_or_default();

        comments.push(Comment {
            author,
            body,
            depth,
            time,
            id,
        });
    }

    debug!(
        "Parsed {} comments ({} beyond depth {} dropped)",
        comments.len(),
        skipped,
        max_depth
    );
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: &str = include_str!("../../testdata/geeknews_topic_full.html");

    #[test]
    fn test_parse_comments() {
        let comments = parse_comments(TOPIC, 10).unwrap();

        assert_eq!(comments.len(), 4);

        let first = &comments[0];
        assert_eq!(first.author, "kuthia");
        assert_eq!(first.depth, 0);
        assert_eq!(first.id, "50523");
        assert_eq!(first.time, "5시간전");
        assert!(first.body.contains("직접 부딪혀 봐야"));
        assert!(first.body.contains("\n\n"));
        assert!(first.body.contains("&"));

        let reply = &comments[1];
        assert_eq!(reply.author, "gracefullight");
        assert_eq!(reply.depth, 1);
        assert!(reply.body.contains("https://example.com/paper"));

        let deleted = &comments[2];
        assert_eq!(deleted.depth, 2);
        assert!(deleted.is_deleted());

        // No style attribute means top level.
        assert_eq!(comments[3].author, "late");
        assert_eq!(comments[3].depth, 0);
    }

    #[test]
    fn test_deep_comments_are_dropped() {
        let comments = parse_comments(TOPIC, 10).unwrap();
        assert!(comments.iter().all(|c| c.author != "deep"));

        let comments = parse_comments(TOPIC, 20).unwrap();
        assert!(comments.iter().any(|c| c.author == "deep" && c.depth == 11));

        let comments = parse_comments(TOPIC, 0).unwrap();
        assert_eq!(comments.len(), 2);
    }

    #[test]
    fn test_overflowing_depth_is_dropped() {
        let html = r#"<div id="comment_thread">
            <div class="comment_row" id="cid7" style="--depth: 99999999999999999999999">
                <div class="commentTD"><div class="comment_contents">buried</div></div>
            </div>
            <div class="comment_row" id="cid8" style="color: red">
                <div class="commentTD"><div class="comment_contents">top</div></div>
            </div>
        </div>"#;

        let comments = parse_comments(html, 10).unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, "8");
        assert_eq!(comments[0].depth, 0);

        let comments = parse_comments(html, usize::MAX).unwrap();
        assert_eq!(comments[0].depth, usize::MAX);
    }

    #[test]
    fn test_empty_thread() {
        let html = "<div id='comment_thread' class='comment_thread'></div>";
        assert!(parse_comments(html, 10).unwrap().is_empty());
    }

    #[test]
    fn test_rows_outside_thread_are_ignored() {
        let html = r#"<div class="comment_row" id="cid1"><div class="commentTD"><div class="comment_contents">stray</div></div></div>"#;
        assert!(parse_comments(html, 10).unwrap().is_empty());
    }
}
