//! Fetch-and-render workflows shared by the CLI and the TUI.
//!
//! Page loaders never fail: every problem is folded into a one-line error
//! page so the caller always has something to show.

use tracing::{debug, warn};

use crate::app::context::AppContext;
use crate::app::error::{GnError, Result};
use crate::domain::Article;
use crate::parser::{parse_comments, parse_feed, parse_topic_content, parse_topic_link};
use crate::render::{error_page, format_paragraphs, topic_page, DisplayLine};

pub const NO_TOPIC_ID_MESSAGE: &str = "토픽 ID를 찾을 수 없습니다.";
pub const NO_LINK_MESSAGE: &str =
    "기사 링크를 찾을 수 없습니다. 'c' 키를 눌러 GeekNews 페이지에서 확인하세요.";
pub const INTERNAL_LINK_MESSAGE: &str =
    "이 게시물은 외부 링크가 없습니다. 'c' 키를 눌러 GeekNews에서 확인하세요.";
pub const EXTRACT_FAILED_MESSAGE: &str =
    "기사 내용을 추출할 수 없습니다. 'space' 키를 눌러 브라우저에서 열어보세요.";

pub fn fetch_failed_message(err: &GnError) -> String {
    format!("페이지를 불러오는데 실패했습니다: {err}")
}

impl AppContext {
    /// Download and parse the article feed.
    pub async fn load_articles(&self) -> Result<Vec<Article>> {
        let source = &self.config.source;
        let body = self.fetcher.fetch(&source.feed_url).await?;
        let articles = parse_feed(&body, &source.domain())?;
        debug!("loaded {} articles", articles.len());
        Ok(articles)
    }

    /// An article whose topic page is `topic?id={id}` on the configured site.
    pub fn article_for_topic(&self, topic_id: &str) -> Article {
        let source = &self.config.source;
        Article {
            comments_link: source.topic_url(topic_id),
            domain: source.domain(),
            ..Article::default()
        }
    }

    /// Topic body plus its comment thread, as display lines.
    pub async fn load_topic_lines(&self, article: &Article) -> Vec<DisplayLine> {
        let Some(topic_id) = article.topic_id() else {
            return error_page(NO_TOPIC_ID_MESSAGE);
        };

        let url = self.config.source.topic_url(&topic_id);
        let html = match self.fetcher.fetch_text(&url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("topic {} fetch failed: {}", topic_id, e);
                return error_page(fetch_failed_message(&e));
            }
        };

        let options = self.render_options();
        let content = parse_topic_content(&html)
            .inspect_err(|e| debug!("topic {} content unavailable: {}", topic_id, e))
            .ok();
        let comments = parse_comments(&html, options.max_comment_depth);

        topic_page(content.as_ref(), comments.as_deref(), options)
    }

    /// The article's external link, read from the topic page when the feed
    /// did not carry it.
    pub async fn resolve_external_link(&self, article: &Article) -> Result<String> {
        if !article.link.is_empty() {
            return Ok(article.link.clone());
        }

        let html = self.fetcher.fetch_text(&article.comments_link).await?;
        let (link, _title) = parse_topic_link(&html)?;
        if link.is_empty() {
            return Err(GnError::NotFound(format!(
                "external link on {}",
                article.comments_link
            )));
        }
        Ok(link)
    }

    /// Readable text of the external article, wrapped for display.
    pub async fn load_article_lines(&self, article: &Article) -> Vec<DisplayLine> {
        let link = match self.resolve_external_link(article).await {
            Ok(link) => link,
            Err(e) => {
                debug!("no external link for {}: {}", article.comments_link, e);
                return error_page(NO_LINK_MESSAGE);
            }
        };

        // Ask-style posts link back into the site with a relative URL.
        if !link.starts_with("http") {
            return error_page(INTERNAL_LINK_MESSAGE);
        }

        match self.extractor.extract(&link).await {
            Ok(text) if !text.trim().is_empty() => {
                format_paragraphs(&text, self.render_options().max_width)
            }
            Ok(_) => error_page(EXTRACT_FAILED_MESSAGE),
            Err(e) => {
                warn!("article extraction failed for {}: {}", link, e);
                error_page(EXTRACT_FAILED_MESSAGE)
            }
        }
    }

    /// Open the external article in the browser, falling back to the topic page.
    pub async fn open_article(&self, article: &Article) -> Result<()> {
        let url = match self.resolve_external_link(article).await {
            Ok(link) => link,
            Err(e) => {
                debug!("falling back to topic page: {}", e);
                article.comments_link.clone()
            }
        };
        self.browser.open(&url)
    }

    /// Open the topic's comment section in the browser.
    pub fn open_comments(&self, article: &Article) -> Result<()> {
        let url = match article.topic_id() {
            Some(id) => self.config.source.comments_url(&id),
            None => article.comments_link.clone(),
        };
        self.browser.open(&url)
    }
}
