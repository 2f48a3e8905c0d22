//! Whole-page composition and the one-line error substitution.

use crate::domain::{Comment, TopicContent};
use crate::render::comments::format_comments;
use crate::render::content::format_topic_content;
use crate::render::line::{DisplayLine, Tone};
use crate::render::RenderOptions;

const RULE_WIDTH: usize = 59;

pub const NO_COMMENTS_MESSAGE: &str =
    "아직 댓글이 없습니다. 오른쪽 화살표 또는 'l' 키를 눌러 기사를 읽어보세요.";

/// A page consisting of a single explanatory line, shown instead of content.
pub fn error_page(message: impl Into<String>) -> Vec<DisplayLine> {
    vec![DisplayLine::styled(message, Tone::Error)]
}

/// Compose a topic page: the topic body (when it has one), a rule, then the thread.
pub fn topic_page<E: std::fmt::Display>(
    content: Option<&TopicContent>,
    comments: Result<&[Comment], E>,
    options: &RenderOptions,
) -> Vec<DisplayLine> {
    let mut lines = Vec::new();

    if let Some(content) = content.filter(|c| !c.body.is_empty()) {
        lines.extend(format_topic_content(content, options));
        lines.push(DisplayLine::blank());
        lines.push(DisplayLine::plain("─".repeat(RULE_WIDTH)));
        lines.push(DisplayLine::blank());
    }

    match comments {
        Err(e) => lines.push(DisplayLine::styled(
            format!("댓글을 파싱하는데 실패했습니다: {e}"),
            Tone::Error,
        )),
        Ok([]) => lines.push(DisplayLine::plain(NO_COMMENTS_MESSAGE)),
        Ok(comments) => lines.extend(format_comments(comments, options)),
    }

    lines
}
