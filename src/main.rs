use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gn_text::app::AppContext;
use gn_text::cli::{commands, Cli, Commands};
use gn_text::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command();

    init_tracing(cli.log.as_deref(), command != Commands::Tui)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(width) = cli.width {
        config.layout = config.layout.with_width(width);
    }
    let ctx = AppContext::new(config)?;

    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Tui => {
            drop(stdout);
            gn_text::tui::run(Arc::new(ctx)).await?;
        }
        Commands::List => {
            commands::list_articles(&ctx, &mut stdout).await?;
        }
        Commands::Topic { id, markup } => {
            commands::show_topic(&ctx, &id, markup, &mut stdout).await?;
        }
        Commands::Article { id } => {
            commands::show_article(&ctx, &id, &mut stdout).await?;
        }
    }

    Ok(())
}

/// Log to `log_file` when given, otherwise to stderr unless the TUI owns the terminal.
///
/// Verbosity comes from `RUST_LOG` and defaults to `warn`.
fn init_tracing(log_file: Option<&Path>, to_stderr: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
        }
        None if to_stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
        None => {}
    }

    Ok(())
}
