pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedSender;

use crate::app::{AppContext, Result};
use crate::domain::Subscription;

use self::app::{ActivePane, InputMode, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
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

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let mut event_handler = EventHandler::new(Duration::from_millis(100));

    tui_app.subscriptions = ctx.store.load()?;

    loop {
        terminal.draw(|frame| layout::render(frame, &tui_app))?;

        match event_handler.next().await {
            AppEvent::Key(key) if tui_app.input_mode != InputMode::Normal => {
                handle_input_key(&mut tui_app, &ctx, key.code, event_handler.sender())?;
            }
            AppEvent::Key(key) => {
                let action = Action::from(key);
                handle_action(&mut tui_app, &ctx, action, event_handler.sender())?;
            }
            AppEvent::FetchDone {
                url,
                epoch,
                outcome,
            } => {
                let failed = outcome.is_failed();
                if tui_app.apply_fetch(&url, epoch, outcome) {
                    let status = if failed {
                        format!("Failed to load {}", url)
                    } else {
                        format!("Loaded {} articles", tui_app.current_articles().len())
                    };
                    tui_app.set_status(status);
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    action: Action,
    events: UnboundedSender<AppEvent>,
) -> Result<()> {
    match action {
        Action::Quit => {
            tui_app.should_quit = true;
        }
        Action::MoveUp => tui_app.move_up(),
        Action::MoveDown => tui_app.move_down(),
        Action::NextPane => tui_app.active_pane = tui_app.active_pane.next(),
        Action::PrevPane => tui_app.active_pane = tui_app.active_pane.prev(),
        Action::Select => {
            if tui_app.active_pane == ActivePane::Subscriptions {
                spawn_fetch(tui_app, ctx, events);
                tui_app.active_pane = ActivePane::Articles;
            }
        }
        Action::Refresh => {
            spawn_fetch(tui_app, ctx, events);
        }
        Action::AddSubscription => {
            tui_app.enter_input(InputMode::AddUrl, "");
        }
        Action::RemoveSubscription => {
            if let Some(sub) = tui_app.selected_subscription() {
                let url = sub.feed_url.clone();
                ctx.store.remove(&url)?;
                tui_app.articles.remove(&url);
                tui_app.subscriptions = ctx.store.load()?;
                tui_app.clamp_selection();
                tui_app.set_status(format!("Removed {}", url));
            }
        }
        Action::RenameSubscription => {
            if let Some(sub) = tui_app.selected_subscription() {
                let current = sub.display_title.clone();
                tui_app.enter_input(InputMode::RenameTitle, &current);
            }
        }
        Action::OpenInBrowser => {
            if let Some(article) = tui_app.selected_article() {
                if article.link.is_empty() {
                    tui_app.set_status("Article has no link".to_string());
                } else if let Err(e) = open::that(&article.link) {
                    tui_app.set_status(format!("Failed to open browser: {}", e));
                }
            }
        }
        Action::None => {}
    }
    Ok(())
}

fn handle_input_key(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    code: KeyCode,
    events: UnboundedSender<AppEvent>,
) -> Result<()> {
    match code {
        KeyCode::Esc => tui_app.leave_input(),
        KeyCode::Backspace => {
            tui_app.input.pop();
            refresh_suggestions(tui_app, ctx);
        }
        KeyCode::Tab => {
            if let Some((_, url)) = tui_app.suggestions.first() {
                tui_app.input = url.clone();
                tui_app.suggestions.clear();
            }
        }
        KeyCode::Enter => {
            let text = tui_app.input.trim().to_string();
            match tui_app.input_mode {
                InputMode::AddUrl if !text.is_empty() => {
                    if ctx.store.add(Subscription::new(text.clone()))? {
                        tui_app.subscriptions = ctx.store.load()?;
                        tui_app.subscription_index = tui_app.subscriptions.len() - 1;
                        tui_app.leave_input();
                        // Load the new subscription right away.
                        spawn_fetch(tui_app, ctx, events);
                        tui_app.active_pane = ActivePane::Articles;
                    } else {
                        tui_app.leave_input();
                        tui_app.set_status(format!("Already subscribed: {}", text));
                    }
                }
                InputMode::RenameTitle => {
                    if let Some(sub) = tui_app.selected_subscription() {
                        let url = sub.feed_url.clone();
                        ctx.store.rename(&url, &text)?;
                        tui_app.subscriptions = ctx.store.load()?;
                    }
                    tui_app.leave_input();
                }
                _ => tui_app.leave_input(),
            }
        }
        KeyCode::Char(c) => {
            tui_app.input.push(c);
            refresh_suggestions(tui_app, ctx);
        }
        _ => {}
    }
    Ok(())
}

fn refresh_suggestions(tui_app: &mut TuiApp, ctx: &Arc<AppContext>) {
    if tui_app.input_mode != InputMode::AddUrl {
        return;
    }
    tui_app.suggestions = ctx
        .directory
        .suggest(&tui_app.input)
        .into_iter()
        .take(5)
        .map(|e| (e.title.clone(), e.feed_url.clone()))
        .collect();
}

/// Fetch the selected subscription on a background task. The result comes
/// back through the event channel carrying the epoch it was started under;
/// anything superseded by a later selection is dropped on arrival.
fn spawn_fetch(tui_app: &mut TuiApp, ctx: &Arc<AppContext>, events: UnboundedSender<AppEvent>) {
    let Some(sub) = tui_app.selected_subscription() else {
        return;
    };
    let url = sub.feed_url.clone();
    let epoch = tui_app.begin_fetch();
    let fetcher = ctx.fetcher.clone();

    tokio::spawn(async move {
        let outcome = fetcher.fetch(&url).await;
        let _ = events.send(AppEvent::FetchDone {
            url,
            epoch,
            outcome,
        });
    });
}
