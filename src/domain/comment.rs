use serde::{Deserialize, Serialize};

/// A single comment of a topic thread.
///
/// Threads are delivered as a depth-first list; `depth` (0 for top level)
/// is the only structural information a comment carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    /// Plain text, paragraphs separated by a blank line. Empty when deleted.
    pub body: String,
    pub depth: usize,
    /// Relative time exactly as the site displays it.
    pub time: String,
    pub id: String,
}

impl Comment {
    pub fn is_deleted(&self) -> bool {
        self.body.is_empty()
    }
}
