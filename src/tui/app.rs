use ratatui::widgets::ListState;

use crate::domain::Article;
use crate::render::DisplayLine;
use crate::tui::event::Payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Articles,
    Comments,
    Article,
}

impl Page {
    pub fn forward(self) -> Option<Self> {
        match self {
            Page::Articles => Some(Page::Comments),
            Page::Comments => Some(Page::Article),
            Page::Article => None,
        }
    }

    pub fn back(self) -> Option<Self> {
        match self {
            Page::Articles => None,
            Page::Comments => Some(Page::Articles),
            Page::Article => Some(Page::Comments),
        }
    }
}

pub const PAGE_SIZE: usize = 10;

/// What a background task should fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    Topic(Article),
    Article(Article),
    Articles,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub target: LoadTarget,
}

/// A scrollable page of rendered lines.
#[derive(Debug, Default)]
pub struct Reader {
    pub lines: Vec<DisplayLine>,
    pub scroll: u16,
}

impl Reader {
    fn replace(&mut self, lines: Vec<DisplayLine>) {
        self.lines = lines;
        self.scroll = 0;
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = self.lines.len().saturating_sub(1).min(u16::MAX as usize) as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }
}

/// All interactive state. Owned by the event loop; background tasks only
/// ever send messages back.
pub struct TuiApp {
    pub page: Page,
    /// Snapshot of the feed. Replaced wholesale on refresh, never edited.
    pub articles: Vec<Article>,
    pub article_index: usize,
    pub article_list_state: ListState,
    pub topic: Reader,
    pub article: Reader,
    pub should_quit: bool,
    pub status_message: Option<String>,
    generation: u64,
    pending: Option<u64>,
}

impl TuiApp {
    pub fn new(articles: Vec<Article>) -> Self {
        let mut article_list_state = ListState::default();
        article_list_state.select(Some(0));

        Self {
            page: Page::Articles,
            articles,
            article_index: 0,
            article_list_state,
            topic: Reader::default(),
            article: Reader::default(),
            should_quit: false,
            status_message: None,
            generation: 0,
            pending: None,
        }
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.article_index)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn reader_mut(&mut self) -> Option<&mut Reader> {
        match self.page {
            Page::Articles => None,
            Page::Comments => Some(&mut self.topic),
            Page::Article => Some(&mut self.article),
        }
    }

    fn select(&mut self, index: usize) {
        self.article_index = index;
        self.article_list_state.select(Some(index));
    }

    fn move_selection(&mut self, delta: isize) {
        if self.articles.is_empty() {
            return;
        }
        let max = self.articles.len() - 1;
        let index = self.article_index.saturating_add_signed(delta).min(max);
        self.select(index);
    }

    fn scroll(&mut self, lines: isize) {
        if let Some(reader) = self.reader_mut() {
            reader.scroll_by(lines as i32);
        } else {
            self.move_selection(lines);
        }
    }

    pub fn move_up(&mut self) {
        self.scroll(-1);
    }

    pub fn move_down(&mut self) {
        self.scroll(1);
    }

    pub fn next_page(&mut self) {
        self.scroll(PAGE_SIZE as isize);
    }

    pub fn prev_page(&mut self) {
        self.scroll(-(PAGE_SIZE as isize));
    }

    fn begin_load(&mut self, target: LoadTarget) -> LoadRequest {
        self.generation += 1;
        self.pending = Some(self.generation);
        LoadRequest {
            generation: self.generation,
            target,
        }
    }

    /// Move one page deeper and return the load that fills it.
    ///
    /// Ignored while another load is in flight.
    pub fn forward(&mut self) -> Option<LoadRequest> {
        if self.is_loading() {
            return None;
        }
        let next = self.page.forward()?;
        let article = self.selected_article()?.clone();

        self.page = next;
        let target = match next {
            Page::Comments => {
                self.topic.replace(Vec::new());
                LoadTarget::Topic(article)
            }
            _ => {
                self.article.replace(Vec::new());
                LoadTarget::Article(article)
            }
        };
        Some(self.begin_load(target))
    }

    /// Move one page up. Returns true when an in-flight load was abandoned.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.page.back() else {
            return false;
        };
        self.page = previous;
        self.pending.take().is_some()
    }

    /// Start a feed refresh from the article list, unless something is
    /// already loading.
    pub fn refresh(&mut self) -> Option<LoadRequest> {
        if self.is_loading() || self.page != Page::Articles {
            return None;
        }
        self.set_status("새로고침 중...".to_string());
        Some(self.begin_load(LoadTarget::Articles))
    }

    /// Apply a finished load. Results from abandoned or superseded loads are
    /// dropped; returns whether anything changed.
    pub fn apply(&mut self, generation: u64, payload: Payload) -> bool {
        if self.pending != Some(generation) {
            return false;
        }
        self.pending = None;

        match payload {
            Payload::Topic(lines) => self.topic.replace(lines),
            Payload::Article(lines) => self.article.replace(lines),
            Payload::Articles(Ok(articles)) => {
                self.set_status(format!("새로고침 완료: {}개", articles.len()));
                self.articles = articles;
                let index = self.article_index.min(self.articles.len().saturating_sub(1));
                self.select(index);
            }
            Payload::Articles(Err(message)) => {
                self.set_status(format!("새로고침 실패: {message}"));
            }
        }
        true
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::error_page;

    fn articles(n: usize) -> Vec<Article> {
        (0..n)
            .map(|i| Article {
                title: format!("article {i}"),
                comments_link: format!("https://news.hada.io/topic?id={i}"),
                ..Article::default()
            })
            .collect()
    }

    fn lines(n: usize) -> Vec<DisplayLine> {
        (0..n).map(|i| DisplayLine::plain(i.to_string())).collect()
    }

    #[test]
    fn test_list_navigation_is_clamped() {
        let mut app = TuiApp::new(articles(15));

        app.move_up();
        assert_eq!(app.article_index, 0);

        app.next_page();
        assert_eq!(app.article_index, 10);
        app.next_page();
        assert_eq!(app.article_index, 14);
        app.move_down();
        assert_eq!(app.article_index, 14);
        assert_eq!(app.article_list_state.selected(), Some(14));

        app.prev_page();
        assert_eq!(app.article_index, 4);
    }

    #[test]
    fn test_empty_list_ignores_navigation() {
        let mut app = TuiApp::new(Vec::new());
        app.move_down();
        app.next_page();
        assert_eq!(app.article_index, 0);
        assert!(app.forward().is_none());
        assert_eq!(app.page, Page::Articles);
    }

    #[test]
    fn test_forward_walks_articles_comments_article() {
        let mut app = TuiApp::new(articles(3));
        app.move_down();

        let request = app.forward().unwrap();
        assert_eq!(app.page, Page::Comments);
        assert_eq!(request.target, LoadTarget::Topic(articles(3)[1].clone()));
        assert!(app.is_loading());

        // single flight
        assert!(app.forward().is_none());
        assert!(app.apply(request.generation, Payload::Topic(lines(3))));
        assert_eq!(app.topic.lines.len(), 3);

        let request = app.forward().unwrap();
        assert_eq!(app.page, Page::Article);
        assert!(matches!(request.target, LoadTarget::Article(_)));
        assert!(app.apply(request.generation, Payload::Article(error_page("x"))));

        assert!(app.forward().is_none());
        assert_eq!(app.page, Page::Article);
    }

    #[test]
    fn test_back_abandons_pending_load() {
        let mut app = TuiApp::new(articles(2));
        let request = app.forward().unwrap();

        assert!(app.back());
        assert_eq!(app.page, Page::Articles);
        assert!(!app.is_loading());

        // the abandoned result arrives late
        assert!(!app.apply(request.generation, Payload::Topic(lines(5))));
        assert!(app.topic.lines.is_empty());

        assert!(!app.back());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut app = TuiApp::new(articles(2));
        let first = app.forward().unwrap();
        app.back();
        let second = app.forward().unwrap();
        assert!(second.generation > first.generation);

        assert!(!app.apply(first.generation, Payload::Topic(lines(1))));
        assert!(app.apply(second.generation, Payload::Topic(lines(2))));
        assert_eq!(app.topic.lines.len(), 2);
    }

    #[test]
    fn test_back_from_article_keeps_topic_lines() {
        let mut app = TuiApp::new(articles(1));
        let request = app.forward().unwrap();
        app.apply(request.generation, Payload::Topic(lines(4)));
        let request = app.forward().unwrap();
        app.apply(request.generation, Payload::Article(lines(2)));

        app.back();
        assert_eq!(app.page, Page::Comments);
        assert_eq!(app.topic.lines.len(), 4);
    }

    #[test]
    fn test_reader_scroll_is_clamped() {
        let mut app = TuiApp::new(articles(1));
        let request = app.forward().unwrap();
        app.apply(request.generation, Payload::Topic(lines(12)));

        app.move_up();
        assert_eq!(app.topic.scroll, 0);
        app.next_page();
        assert_eq!(app.topic.scroll, 10);
        app.next_page();
        assert_eq!(app.topic.scroll, 11);
        app.prev_page();
        assert_eq!(app.topic.scroll, 1);
        // the list selection is untouched while reading
        assert_eq!(app.article_index, 0);
    }

    #[test]
    fn test_refresh_replaces_snapshot() {
        let mut app = TuiApp::new(articles(5));
        app.next_page();
        assert_eq!(app.article_index, 4);

        let request = app.refresh().unwrap();
        assert!(app.refresh().is_none());
        assert!(app.apply(request.generation, Payload::Articles(Ok(articles(2)))));

        assert_eq!(app.articles.len(), 2);
        assert_eq!(app.article_index, 1);
        assert_eq!(app.status_message.as_deref(), Some("새로고침 완료: 2개"));
    }

    #[test]
    fn test_refresh_only_from_article_list() {
        let mut app = TuiApp::new(articles(1));
        let request = app.forward().unwrap();
        app.apply(request.generation, Payload::Topic(lines(1)));

        assert!(app.refresh().is_none());
    }

    #[test]
    fn test_refresh_failure_keeps_snapshot() {
        let mut app = TuiApp::new(articles(3));
        let request = app.refresh().unwrap();
        app.apply(request.generation, Payload::Articles(Err("timeout".into())));

        assert_eq!(app.articles.len(), 3);
        assert_eq!(app.status_message.as_deref(), Some("새로고침 실패: timeout"));
        assert!(!app.is_loading());
    }
}
