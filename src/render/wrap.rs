//! Greedy word wrapping measured in terminal display cells.

use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal cells (East-Asian wide characters count as 2).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Wrap `text` into lines no wider than `max_width` cells, each prefixed with `indent`.
///
/// The text is tokenized on whitespace and packed greedily. The indent counts
/// against `max_width`. A word wider than the remaining room is never split:
/// it is placed on a line of its own and allowed to overflow.
///
/// Empty or all-whitespace input produces no lines at all.
pub fn wrap(text: &str, max_width: usize, indent: &str) -> Vec<String> {
    let effective_width = max_width.saturating_sub(display_width(indent));

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);

        if current_width > 0 && current_width + word_width + 1 > effective_width {
            lines.push(format!("{indent}{current}"));
            current.clear();
            current_width = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(format!("{indent}{current}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_widths(lines: &[String], indent: &str) -> Vec<usize> {
        lines
            .iter()
            .map(|l| display_width(l.strip_prefix(indent).unwrap()))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(wrap("", 60, "").is_empty());
        assert!(wrap("", 60, "| ").is_empty());
        assert!(wrap("   \n\t  ", 60, ">> ").is_empty());
    }

    #[test]
    fn test_single_word_with_indent() {
        assert_eq!(wrap("hello", 60, ">> "), vec![">> hello"]);
    }

    #[test]
    fn test_english_wraps_and_keeps_indent() {
        let text = "This is a test string that should be wrapped at a certain width";
        let lines = wrap(text, 30, "  ");

        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(line.starts_with("  "), "missing indent: {line:?}");
        }
        for width in body_widths(&lines, "  ") {
            assert!(width <= 28);
        }
    }

    #[test]
    fn test_collapses_whitespace_between_words() {
        assert_eq!(wrap("a   b\n\nc\td", 60, ""), vec!["a b c d"]);
    }

    #[test]
    fn test_korean_counts_two_cells_per_syllable() {
        assert_eq!(display_width("한글"), 4);
        assert_eq!(display_width("hello"), 5);

        let text = "한글 테스트 문자열입니다 긴 문장을 줄바꿈하는 테스트";
        let lines = wrap(text, 30, "");

        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(!line.is_empty());
            assert!(display_width(line) <= 30);
        }
    }

    #[test]
    fn test_mixed_scripts_respect_effective_width() {
        let text = "안녕 hello 세계 world 테스트 test";
        let lines = wrap(text, 20, "| ");

        assert!(!lines.is_empty());
        for line in &lines {
            assert!(line.starts_with("| "));
        }
        for width in body_widths(&lines, "| ") {
            assert!(width <= 18);
        }
    }

    #[test]
    fn test_long_word_is_not_split() {
        let long = "x".repeat(25);
        let text = format!("short {long} tail");
        let lines = wrap(&text, 20, "");

        assert_eq!(lines, vec!["short".to_string(), long, "tail".to_string()]);
    }

    #[test]
    fn test_indent_wider_than_width_puts_each_word_alone() {
        let lines = wrap("one two three", 2, "....");
        assert_eq!(lines, vec!["....one", "....two", "....three"]);
    }

    #[test]
    fn test_exact_fit_boundary() {
        assert_eq!(wrap("aaaa bbbbb", 10, ""), vec!["aaaa bbbbb"]);
        assert_eq!(wrap("aaaa bbbbbb", 10, ""), vec!["aaaa", "bbbbbb"]);
    }

    #[test]
    fn test_rewrapping_is_stable() {
        let text = "줄바꿈 테스트 with some English words mixed 그리고 한국어 단어들 together here";
        let indent = "   | ";
        let first = wrap(text, 24, indent);

        let joined = first
            .iter()
            .map(|l| l.strip_prefix(indent).unwrap())
            .collect::<Vec<_>>()
            .join(" ");
        let second = wrap(&joined, 24, indent);

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_trailing_whitespace() {
        for line in wrap("alpha beta gamma delta epsilon zeta eta theta", 12, "") {
            assert_eq!(line, line.trim_end());
        }
    }
}
