//! HTML fragment to plain text.

use tracing::debug;

/// Line width handed to html2text. Wide enough that it never wraps;
/// wrapping is done later, in display cells.
const RENDER_WIDTH: usize = 10_000;

/// Convert an HTML fragment into plain text.
///
/// Paragraphs come out separated by a blank line, links as their text,
/// entities decoded. Unparsable input yields an empty string.
pub fn sanitize(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    match html2text::config::plain_no_decorate().string_from_read(html.as_bytes(), RENDER_WIDTH) {
        Ok(text) => text
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string(),
        Err(e) => {
            debug!("html2text failed: {}", e);
            String::new()
        }
    }
}
