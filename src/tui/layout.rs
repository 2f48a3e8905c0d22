use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::config::ColorConfig;
use crate::render::DisplayLine;
use crate::tui::app::{Page, Reader, TuiApp};

const LOADING: &str = "불러오는 중...";

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Current page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.page {
        Page::Articles => render_articles_pane(frame, app, chunks[0], colors),
        Page::Comments => {
            let title = pane_title(app, "댓글");
            render_reader_pane(frame, &app.topic, title, app.is_loading(), chunks[0], colors);
        }
        Page::Article => {
            let title = pane_title(app, "기사");
            render_reader_pane(frame, &app.article, title, app.is_loading(), chunks[0], colors);
        }
    }
    render_status_bar(frame, app, chunks[1], colors);
}

fn pane_title(app: &TuiApp, label: &str) -> String {
    match app.selected_article() {
        Some(article) => format!(" {} · {} ", label, article.display_title()),
        None => format!(" {label} "),
    }
}

fn render_articles_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|article| {
            ListItem::new(Text::from(vec![
                Line::from(article.display_title().to_string()),
                Line::from(Span::styled(
                    format!("  {}", article.domain),
                    Style::default().fg(colors.secondary_text),
                )),
            ]))
        })
        .collect();

    let title = format!(
        " GeekNews ({}) [{}/{}] ",
        app.articles.len(),
        app.article_index + 1,
        app.articles.len().max(1)
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.article_list_state);
}

fn render_reader_pane(
    frame: &mut Frame,
    reader: &Reader,
    title: String,
    loading: bool,
    area: Rect,
    colors: &ColorConfig,
) {
    let content = if reader.lines.is_empty() && loading {
        Text::from(Span::styled(LOADING, Style::default().fg(colors.meta)))
    } else {
        to_text(&reader.lines, colors)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.inactive_border));

    // Lines are already wrapped to the configured width
    let paragraph = Paragraph::new(content).block(block).scroll((reader.scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Convert rendered lines into styled ratatui text.
pub fn to_text<'a>(lines: &'a [DisplayLine], colors: &ColorConfig) -> Text<'a> {
    lines
        .iter()
        .map(|line| {
            Line::from(
                line.segments
                    .iter()
                    .map(|segment| Span::styled(segment.text.as_str(), colors.tone_style(segment.tone)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        match app.page {
            Page::Articles => "j/k:이동  l:댓글  space:브라우저  c:댓글 열기  r:새로고침  q:종료",
            Page::Comments => "j/k:스크롤  n/p:페이지  l:기사  h:목록  space:브라우저  q:종료",
            Page::Article => "j/k:스크롤  n/p:페이지  h:댓글  space:브라우저  q:종료",
        }
        .to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
