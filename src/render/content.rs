use crate::domain::TopicContent;
use crate::render::line::{DisplayLine, Tone};
use crate::render::wrap::wrap;
use crate::render::RenderOptions;

const META_SEPARATOR: &str = " · ";

/// Lay out a topic's title, byline and body.
///
/// Empty fields are skipped rather than rendered blank, so an all-empty
/// topic produces no lines.
pub fn format_topic_content(content: &TopicContent, options: &RenderOptions) -> Vec<DisplayLine> {
    let mut lines = Vec::new();

    if !content.title.is_empty() {
        lines.push(DisplayLine::styled(content.title.clone(), Tone::Highlight));
        lines.push(DisplayLine::blank());
    }

    let points = (!content.points.is_empty()).then(|| format!("{}P", content.points));
    let meta: Vec<&str> = [
        Some(content.author.as_str()),
        Some(content.time.as_str()),
        points.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect();

    if !meta.is_empty() {
        lines.push(DisplayLine::styled(meta.join(META_SEPARATOR), Tone::Muted));
        lines.push(DisplayLine::blank());
    }

    lines.extend(format_paragraphs(&content.body, options.max_width));
    lines
}

/// Wrap blank-line separated paragraphs, honouring single newlines as hard breaks.
///
/// Each paragraph is followed by one blank line.
pub fn format_paragraphs(body: &str, max_width: usize) -> Vec<DisplayLine> {
    let mut lines = Vec::new();

    for paragraph in body.split("\n\n").map(str::trim) {
        if paragraph.is_empty() {
            continue;
        }

        for sub_line in paragraph.split('\n').map(str::trim) {
            if sub_line.is_empty() {
                continue;
            }
            lines.extend(wrap(sub_line, max_width, "").into_iter().map(DisplayLine::plain));
        }

        lines.push(DisplayLine::blank());
    }

    lines
}
