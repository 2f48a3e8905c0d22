use std::io::Write;

use crate::app::{AppContext, Result};
use crate::domain::{extract_topic_id, Article};
use crate::render::DisplayLine;

/// Print one line per article: topic id, title and domain.
pub async fn list_articles(ctx: &AppContext, out: &mut impl Write) -> Result<()> {
    let articles = ctx.load_articles().await?;

    if articles.is_empty() {
        writeln!(out, "No articles")?;
        return Ok(());
    }

    for article in &articles {
        let id = article.topic_id().unwrap_or_else(|| "-".to_string());
        writeln!(out, "{:>6}  {} ({})", id, article.display_title(), article.domain)?;
    }

    Ok(())
}

/// Print a topic page, markup stripped unless `markup` is set.
pub async fn show_topic(ctx: &AppContext, id: &str, markup: bool, out: &mut impl Write) -> Result<()> {
    let lines = ctx.load_topic_lines(&article_from_arg(ctx, id)).await;
    write_lines(&lines, markup, out)
}

/// Print the extracted text of a topic's external article.
pub async fn show_article(ctx: &AppContext, id: &str, out: &mut impl Write) -> Result<()> {
    let lines = ctx.load_article_lines(&article_from_arg(ctx, id)).await;
    write_lines(&lines, false, out)
}

/// Accept either a bare topic id or a full topic URL.
fn article_from_arg(ctx: &AppContext, arg: &str) -> Article {
    match extract_topic_id(arg) {
        Some(_) => Article {
            comments_link: arg.to_string(),
            domain: ctx.config.source.domain(),
            ..Article::default()
        },
        None => ctx.article_for_topic(arg.trim()),
    }
}

fn write_lines(lines: &[DisplayLine], markup: bool, out: &mut impl Write) -> Result<()> {
    for line in lines {
        if markup {
            writeln!(out, "{}", line.to_markup())?;
        } else {
            writeln!(out, "{}", line.text())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::fetcher::testing::FakeFetcher;

    const FEED: &str = include_str!("../../testdata/geeknews_feed.xml");
    const TOPIC: &str = include_str!("../../testdata/geeknews_topic_full.html");

    fn context(fetcher: FakeFetcher) -> AppContext {
        AppContext::with_fetcher(Config::default(), Arc::new(fetcher))
    }

    async fn run_topic(ctx: &AppContext, id: &str, markup: bool) -> String {
        let mut out = Vec::new();
        show_topic(ctx, id, markup, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_list_articles() {
        let ctx = context(FakeFetcher::default().with_page("https://news.hada.io/rss/news", FEED));
        let mut out = Vec::new();
        list_articles(&ctx, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 26364  "));
        assert!(lines[0].ends_with("(news.hada.io)"));
        assert!(lines[1].starts_with(" 26363  "));
    }

    #[tokio::test]
    async fn test_show_topic_plain_and_markup() {
        let ctx = context(
            FakeFetcher::default().with_page("https://news.hada.io/topic?id=26364", TOPIC),
        );

        let plain = run_topic(&ctx, "26364", false).await;
        assert!(!plain.contains("[yellow]"));
        assert!(plain.contains("| kuthia (5시간전) 님:"));

        let marked = run_topic(&ctx, "https://news.hada.io/topic?id=26364", true).await;
        assert!(marked.starts_with("[yellow]"));
        assert!(marked.contains("[gray]xguru"));
    }

    #[tokio::test]
    async fn test_markup_output_escapes_comment_text() {
        let page = r#"<html><body><div id="comment_thread">
            <div class="comment_row" id="cid1" style="--depth: 0">
                <div class="commentinfo"><a href="/user?id=lee">lee</a></div>
                <div class="commentTD"><div class="comment_contents">use [red] here</div></div>
            </div>
        </div></body></html>"#;
        let ctx = context(FakeFetcher::default().with_page("https://news.hada.io/topic?id=7", page));

        let marked = run_topic(&ctx, "7", true).await;
        assert!(marked.contains("| use [red[] here"));

        let plain = run_topic(&ctx, "7", false).await;
        assert!(plain.contains("| use [red] here"));
    }

    #[tokio::test]
    async fn test_show_article_prints_error_line() {
        let ctx = context(FakeFetcher::default());
        let mut out = Vec::new();
        show_article(&ctx, "26364", &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap().trim_end(),
            crate::app::loader::NO_LINK_MESSAGE
        );
    }
}
