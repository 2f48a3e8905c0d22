use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::app::Result;
use crate::domain::Article;
use crate::render::DisplayLine;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for a key press.
    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            // Windows reports releases too
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(AppEvent::Key(key));
                }
            }
        }
        Ok(AppEvent::Tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    Forward,
    Back,
    OpenArticle,
    OpenComments,
    Refresh,
    None,
}

/// Results sent back to the event loop by background tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// A page load finished. Only the newest generation is applied.
    Loaded { generation: u64, payload: Payload },
    Status(String),
}

#[derive(Debug)]
pub enum Payload {
    Topic(Vec<DisplayLine>),
    Article(Vec<DisplayLine>),
    /// Feed refresh; the error is already rendered for the status bar.
    Articles(std::result::Result<Vec<Article>, String>),
}
