use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::fetcher::FetchOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    /// A background fetch finished. `epoch` identifies the selection that
    /// requested it; stale epochs are discarded by the app state.
    FetchDone {
        url: String,
        epoch: u64,
        outcome: FetchOutcome,
    },
    Tick,
}

/// Single event channel fed by a terminal-polling thread; background fetch
/// tasks push their completions through [`sender`](EventHandler::sender).
pub struct EventHandler {
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let key_tx = tx.clone();
        std::thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    _ => AppEvent::Tick,
                }
            } else {
                AppEvent::Tick
            };
            if key_tx.send(event).is_err() {
                break;
            }
        });

        Self { tx, rx }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> AppEvent {
        self.rx.recv().await.unwrap_or(AppEvent::Tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPane,
    PrevPane,
    Select,
    AddSubscription,
    RemoveSubscription,
    RenameSubscription,
    OpenInBrowser,
    Refresh,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Tab => Action::NextPane,
            KeyCode::BackTab => Action::PrevPane,
            KeyCode::Enter => Action::Select,
            KeyCode::Char('a') => Action::AddSubscription,
            KeyCode::Char('d') => Action::RemoveSubscription,
            KeyCode::Char('e') => Action::RenameSubscription,
            KeyCode::Char('o') => Action::OpenInBrowser,
            KeyCode::Char('R') => Action::Refresh,
            _ => Action::None,
        }
    }
}
