//! Text layout for topics and comment threads.
//!
//! Everything in here is a pure function from parsed records to a fresh
//! `Vec<DisplayLine>`. Nothing performs I/O or keeps state between calls.

pub mod comments;
pub mod content;
pub mod line;
pub mod page;
pub mod wrap;

pub use comments::format_comments;
pub use content::{format_paragraphs, format_topic_content};
pub use line::{escape_markup, to_plain_text, DisplayLine, Segment, Tone};
pub use page::{error_page, topic_page, NO_COMMENTS_MESSAGE};
pub use wrap::{display_width, wrap};

use serde::Deserialize;

/// Layout knobs shared by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Column budget for wrapped text, indentation included.
    pub max_width: usize,
    /// Nesting level past which comment indentation stops growing.
    pub max_visual_depth: usize,
    /// Comments deeper than this are dropped by the parser and marked `[...]` by the flattener.
    pub max_comment_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: 60,
            max_visual_depth: 4,
            max_comment_depth: 10,
        }
    }
}

impl RenderOptions {
    pub fn with_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }
}
