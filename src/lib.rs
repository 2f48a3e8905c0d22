//! # gn-text
//!
//! A terminal reader for GeekNews: browse the article list, read a topic's
//! body and comment thread, and read the linked article as plain text.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → parser → render → TUI / CLI
//! ```
//!
//! - [`fetcher`]: HTTP client behind an async trait
//! - [`parser`]: Feed and topic-page HTML to typed records
//! - [`render`]: Width-aware wrapping and comment-thread flattening
//! - [`tui`]: Terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI
//! gn-text
//!
//! # Print the article list
//! gn-text list
//!
//! # Print a topic with its comments
//! gn-text topic 26364
//! ```

/// Application context, page loaders and error types.
///
/// [`AppContext`](app::AppContext) wires the configuration to the fetcher,
/// article extractor and browser.
pub mod app;

/// Opening URLs in the system browser.
pub mod browser;

/// Configuration loaded from `~/.config/gn-text/config.toml`:
/// - Source URLs and HTTP settings
/// - Layout widths and depth caps
/// - Custom colors (named or hex)
/// - Custom keybindings
/// - Article extraction selectors
pub mod config;

/// Command-line interface using clap.
///
/// - `tui` (default) - Launch the TUI
/// - `list` - Print the article list
/// - `topic <id>` - Print a topic page
/// - `article <id>` - Print a topic's external article
pub mod cli;

/// Core domain models.
///
/// - [`Article`](domain::Article): One feed entry
/// - [`Comment`](domain::Comment): One comment with its nesting depth
/// - [`TopicContent`](domain::TopicContent): A topic's own post
pub mod domain;

/// Readable-text extraction for external article pages.
pub mod extractor;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for retrieving bytes
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Feed and topic-page parsing.
pub mod parser;

/// Text layout: wrapping, topic formatting, comment-thread flattening.
pub mod render;

/// Terminal user interface.
///
/// Three pages, walked left to right: article list, topic with comments,
/// extracted article text.
pub mod tui;
