use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum GnError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open browser: {0}")]
    Browser(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Coarse classification of a [`GnError`], for callers that branch on the
/// failure category rather than the exact cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Config,
    Io,
    Browser,
    NotFound,
    Other,
}

impl GnError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GnError::Http(_) | GnError::Status { .. } => ErrorKind::Network,
            GnError::FeedParse(_) | GnError::HtmlParse(_) | GnError::InvalidUrl(_) => {
                ErrorKind::Parse
            }
            GnError::Io(_) => ErrorKind::Io,
            GnError::Config(_) => ErrorKind::Config,
            GnError::Browser(_) => ErrorKind::Browser,
            GnError::NotFound(_) => ErrorKind::NotFound,
            GnError::Other(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, GnError>;
