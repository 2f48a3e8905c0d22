pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gn-text", version)]
#[command(about = "A terminal reader for GeekNews", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/gn-text/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    /// Override the text width used for wrapping
    #[arg(short, long, global = true)]
    pub width: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Launch the TUI (the default)
    Tui,
    /// Print the current article list
    List,
    /// Print a topic's body and comment thread
    Topic {
        /// Topic id, or the full topic URL
        id: String,

        /// Keep color markup such as [yellow]...[-] in the output
        #[arg(long)]
        markup: bool,
    },
    /// Print the readable text of a topic's external article
    Article {
        /// Topic id, or the full topic URL
        id: String,
    },
}

impl Cli {
    /// The command to run; no subcommand means the TUI.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["gn-text"]).unwrap();
        assert_eq!(cli.command(), Commands::Tui);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_topic_with_global_flags() {
        let cli = Cli::try_parse_from([
            "gn-text", "topic", "26364", "--markup", "--width", "80", "--log", "/tmp/gn.log",
        ])
        .unwrap();

        assert_eq!(
            cli.command(),
            Commands::Topic {
                id: "26364".into(),
                markup: true
            }
        );
        assert_eq!(cli.width, Some(80));
        assert_eq!(cli.log, Some(PathBuf::from("/tmp/gn.log")));
    }

    #[test]
    fn test_article_requires_id() {
        assert!(Cli::try_parse_from(["gn-text", "article"]).is_err());
        assert!(Cli::try_parse_from(["gn-text", "--width", "wide"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["gn-text", "-V"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
