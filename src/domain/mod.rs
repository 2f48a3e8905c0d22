pub mod article;
pub mod comment;
pub mod topic;

pub use article::{extract_domain, extract_topic_id, Article};
pub use comment::Comment;
pub use topic::TopicContent;
