//! Display lines: the unit handed from the formatters to whatever draws them.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A bracketed run the markup reader would take for a tag.
static TAG_LIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"(\[[a-zA-Z0-9_,;: \-\."#]+\[*)\]"##).expect("valid tag regex"));

/// Escape text for the `[color]...[-]` convention: `[red]` becomes `[red[]`.
pub fn escape_markup(text: &str) -> String {
    TAG_LIKE_RE.replace_all(text, "$1[]").into_owned()
}

/// Semantic style attached to a run of text.
///
/// Styles are attributes, never characters in the text. The TUI maps them to
/// colors; the plain-text sink drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Highlight,
    Muted,
    Error,
}

impl Tone {
    /// Color name used by the `[color]...[-]` markup convention.
    pub fn markup_name(self) -> Option<&'static str> {
        match self {
            Tone::Plain => None,
            Tone::Highlight => Some("yellow"),
            Tone::Muted => Some("gray"),
            Tone::Error => Some("red"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

impl Segment {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One row of output: an ordered list of styled segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayLine {
    pub segments: Vec<Segment>,
}

impl DisplayLine {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Plain)
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            segments: vec![Segment::new(text, tone)],
        }
    }

    /// The visible text with all styling removed.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// True when the line has no visible characters at all.
    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }

    /// Render the line using `[color]text[-]` markup for styled segments.
    ///
    /// Bracketed runs inside the text are escaped so they never read back as tags.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let text = escape_markup(&segment.text);
            match segment.tone.markup_name() {
                Some(name) => {
                    out.push('[');
                    out.push_str(name);
                    out.push(']');
                    out.push_str(&text);
                    out.push_str("[-]");
                }
                None => out.push_str(&text),
            }
        }
        out
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

impl From<String> for DisplayLine {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<&str> for DisplayLine {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

/// Plain text of every line, one per row.
pub fn to_plain_text(lines: &[DisplayLine]) -> String {
    lines
        .iter()
        .map(DisplayLine::text)
        .collect::<Vec<_>>()
        .join("\n")
}
