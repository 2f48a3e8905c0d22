use crate::domain::Comment;
use crate::render::line::DisplayLine;
use crate::render::wrap::wrap;
use crate::render::RenderOptions;

const INDENT_UNIT: &str = "   ";
const INDENT_UNITS_PER_LEVEL: usize = 2;
const GUTTER: &str = "| ";
const AUTHOR_SUFFIX: &str = " 님:";
pub const DELETED_MARKER: &str = "[삭제됨]";
pub const ELIDED_MARKER: &str = "[...]";
const SEPARATOR: &str = "  ";

/// Indentation prefix for a comment at `depth`.
///
/// Grows by six cells per level up to `max_visual_depth`, then stays put.
pub fn comment_indent(depth: usize, max_visual_depth: usize) -> String {
    let visual_depth = depth.min(max_visual_depth);
    format!(
        "{}{GUTTER}",
        INDENT_UNIT.repeat(visual_depth * INDENT_UNITS_PER_LEVEL)
    )
}

/// Flatten a depth-first list of comments into indented display lines.
///
/// Input order plus each comment's `depth` is trusted to describe the thread;
/// no parent links are rebuilt here.
pub fn format_comments(comments: &[Comment], options: &RenderOptions) -> Vec<DisplayLine> {
    let mut lines = Vec::new();

    for comment in comments {
        let indent = comment_indent(comment.depth, options.max_visual_depth);

        let mut header = format!("{indent}{}", comment.author);
        if !comment.time.is_empty() {
            header.push_str(&format!(" ({})", comment.time));
        }
        header.push_str(AUTHOR_SUFFIX);
        lines.push(DisplayLine::plain(header));

        if comment.is_deleted() {
            lines.push(DisplayLine::plain(format!("{indent}{DELETED_MARKER}")));
        } else {
            let mut body: Vec<String> = Vec::new();
            for paragraph in comment.body.split("\n\n").map(str::trim) {
                if paragraph.is_empty() {
                    continue;
                }
                body.extend(wrap(paragraph, options.max_width, &indent));
                body.push(indent.clone());
            }
            if body.last() == Some(&indent) {
                body.pop();
            }
            lines.extend(body.into_iter().map(DisplayLine::plain));
        }

        // The parser already drops these, so this only fires for comments
        // built elsewhere.
        if comment.depth > options.max_comment_depth {
            lines.push(DisplayLine::plain(format!("{indent}{ELIDED_MARKER}")));
        }

        lines.push(DisplayLine::plain(SEPARATOR));
    }

    lines
}
