pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::{AppContext, GnError, Result};
use crate::domain::Article;

use self::app::{LoadRequest, LoadTarget, TuiApp};
use self::event::{Action, AppEvent, AppMessage, EventHandler, Payload};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Fetch the article list, then run the interactive client until quit.
pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let articles = ctx.load_articles().await?;

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, articles).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    ctx: Arc<AppContext>,
    articles: Vec<Article>,
) -> Result<()> {
    let mut tui_app = TuiApp::new(articles);
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut in_flight: Option<JoinHandle<()>> = None;

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &ctx.config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = ctx.config.keybindings.get_action(&key);
                if action != Action::None {
                    tui_app.clear_status();
                }

                match action {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::MoveUp => {
                        tui_app.move_up();
                    }
                    Action::MoveDown => {
                        tui_app.move_down();
                    }
                    Action::NextPage => {
                        tui_app.next_page();
                    }
                    Action::PrevPage => {
                        tui_app.prev_page();
                    }
                    Action::Forward => {
                        if let Some(request) = tui_app.forward() {
                            in_flight = Some(spawn_load(&ctx, request, tx.clone()));
                        }
                    }
                    Action::Back => {
                        if tui_app.back() {
                            if let Some(handle) = in_flight.take() {
                                debug!("abandoning in-flight load");
                                handle.abort();
                            }
                        }
                    }
                    Action::Refresh => {
                        if let Some(request) = tui_app.refresh() {
                            in_flight = Some(spawn_load(&ctx, request, tx.clone()));
                        }
                    }
                    Action::OpenArticle => {
                        if let Some(article) = tui_app.selected_article().cloned() {
                            spawn_open(&ctx, OpenTarget::Article(article), tx.clone());
                        }
                    }
                    Action::OpenComments => {
                        if let Some(article) = tui_app.selected_article().cloned() {
                            spawn_open(&ctx, OpenTarget::Comments(article), tx.clone());
                        }
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        while let Ok(message) = rx.try_recv() {
            match message {
                AppMessage::Loaded {
                    generation,
                    payload,
                } => {
                    if tui_app.apply(generation, payload) {
                        in_flight = None;
                    } else {
                        debug!("discarding stale load {}", generation);
                    }
                }
                AppMessage::Status(status) => tui_app.set_status(status),
            }
        }

        if tui_app.should_quit {
            break;
        }
    }

    if let Some(handle) = in_flight {
        handle.abort();
    }
    Ok(())
}

fn spawn_load(
    ctx: &Arc<AppContext>,
    request: LoadRequest,
    tx: UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    let ctx = ctx.clone();
    tokio::spawn(async move {
        let payload = match request.target {
            LoadTarget::Topic(article) => Payload::Topic(ctx.load_topic_lines(&article).await),
            LoadTarget::Article(article) => {
                Payload::Article(ctx.load_article_lines(&article).await)
            }
            LoadTarget::Articles => {
                Payload::Articles(ctx.load_articles().await.map_err(|e| e.to_string()))
            }
        };
        // The receiver is gone once the loop has exited
        let _ = tx.send(AppMessage::Loaded {
            generation: request.generation,
            payload,
        });
    })
}

enum OpenTarget {
    Article(Article),
    Comments(Article),
}

/// Open a page in the browser off the event loop; failures come back as a status line.
fn spawn_open(
    ctx: &Arc<AppContext>,
    target: OpenTarget,
    tx: UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    let ctx = ctx.clone();
    tokio::spawn(async move {
        let result = match target {
            OpenTarget::Article(article) => ctx.open_article(&article).await,
            OpenTarget::Comments(article) => {
                tokio::task::spawn_blocking(move || ctx.open_comments(&article))
                    .await
                    .unwrap_or_else(|e| Err(GnError::Browser(e.to_string())))
            }
        };
        if let Err(e) = result {
            warn!("{}", e);
            let _ = tx.send(AppMessage::Status(e.to_string()));
        }
    })
}
