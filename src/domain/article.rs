use serde::{Deserialize, Serialize};
use url::Url;

/// One entry of the news feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// External article URL. Empty until resolved from the topic page.
    pub link: String,
    /// Comment count as shown by the source; the feed does not carry it.
    pub comments: String,
    /// URL of the topic page on the news site.
    pub comments_link: String,
    pub domain: String,
}

impl Article {
    pub fn topic_id(&self) -> Option<String> {
        extract_topic_id(&self.comments_link)
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

/// Value of the `id` query parameter of a topic URL.
pub fn extract_topic_id(topic_url: &str) -> Option<String> {
    let url = Url::parse(topic_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// Host (with port, when present) of a URL.
pub fn extract_domain(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
