use serde::{Deserialize, Serialize};

/// How readable text is pulled out of an external article page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Shortest text a content selector match may have before it is skipped (default: 100)
    pub min_content_length: usize,

    /// CSS selectors to try for article content extraction, in priority order
    pub content_selectors: Vec<String>,

    /// CSS selectors for elements to remove (ads, navigation, etc.)
    pub remove_selectors: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };

        Self {
            min_content_length: 100,
            content_selectors: owned(&[
                "article",
                "[role=\"main\"]",
                "main",
                ".post-content",
                ".article-content",
                ".entry-content",
                ".content",
                "#content",
                ".post",
                ".article",
            ]),
            remove_selectors: owned(&[
                "nav",
                "header",
                "footer",
                "aside",
                ".sidebar",
                ".advertisement",
                ".ad",
                ".ads",
                ".social-share",
                ".comments",
                "script",
                "style",
                "noscript",
            ]),
        }
    }
}
