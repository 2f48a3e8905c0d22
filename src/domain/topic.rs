use serde::{Deserialize, Serialize};

/// Header and body of a topic page. Missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicContent {
    pub title: String,
    pub external_link: String,
    pub body: String,
    pub author: String,
    pub time: String,
    pub points: String,
}

impl TopicContent {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.external_link.is_empty()
            && self.body.is_empty()
            && self.author.is_empty()
            && self.time.is_empty()
            && self.points.is_empty()
    }
}
