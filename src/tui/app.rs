use std::collections::HashMap;

use crate::domain::{Article, Subscription};
use crate::fetcher::FetchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Subscriptions,
    Articles,
    Content,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Subscriptions => ActivePane::Articles,
            ActivePane::Articles => ActivePane::Content,
            ActivePane::Content => ActivePane::Subscriptions,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActivePane::Subscriptions => ActivePane::Content,
            ActivePane::Articles => ActivePane::Subscriptions,
            ActivePane::Content => ActivePane::Articles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a URL for a new subscription, with directory suggestions.
    AddUrl,
    /// Typing a new display title for the selected subscription.
    RenameTitle,
}

pub struct TuiApp {
    pub active_pane: ActivePane,
    pub subscriptions: Vec<Subscription>,
    /// Fetched article lists keyed by feed URL, each replaced wholesale on
    /// every fetch. A failed fetch stores its single placeholder row here.
    pub articles: HashMap<String, Vec<Article>>,
    pub subscription_index: usize,
    pub article_index: usize,
    pub content_scroll: u16,
    pub input_mode: InputMode,
    pub input: String,
    pub suggestions: Vec<(String, String)>,
    pub fetch_epoch: u64,
    pub is_fetching: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            active_pane: ActivePane::Subscriptions,
            subscriptions: Vec::new(),
            articles: HashMap::new(),
            subscription_index: 0,
            article_index: 0,
            content_scroll: 0,
            input_mode: InputMode::Normal,
            input: String::new(),
            suggestions: Vec::new(),
            fetch_epoch: 0,
            is_fetching: false,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn selected_subscription(&self) -> Option<&Subscription> {
        self.subscriptions.get(self.subscription_index)
    }

    pub fn current_articles(&self) -> &[Article] {
        self.selected_subscription()
            .and_then(|sub| self.articles.get(&sub.feed_url))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.current_articles().get(self.article_index)
    }

    /// Start a fetch for the current selection, superseding any in flight.
    /// Returns the epoch the completion must carry to be applied.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_epoch += 1;
        self.is_fetching = true;
        self.fetch_epoch
    }

    /// Apply a completed fetch, unless the selection moved on since it was
    /// started. Returns whether the result was applied.
    pub fn apply_fetch(&mut self, url: &str, epoch: u64, outcome: FetchOutcome) -> bool {
        if epoch != self.fetch_epoch {
            tracing::debug!(url, epoch, current = self.fetch_epoch, "discarding stale fetch");
            return false;
        }
        // The newest fetch finished either way; only apply its result if
        // the selection still points at the feed that requested it.
        self.is_fetching = false;
        if self
            .selected_subscription()
            .map_or(true, |sub| sub.feed_url != url)
        {
            tracing::debug!(url, epoch, "discarding fetch for unselected feed");
            return false;
        }

        self.articles.insert(url.to_string(), outcome.into_articles());
        self.article_index = 0;
        self.content_scroll = 0;
        true
    }

    pub fn move_up(&mut self) {
        match self.active_pane {
            ActivePane::Subscriptions => {
                if self.subscription_index > 0 {
                    self.subscription_index -= 1;
                    self.article_index = 0;
                    self.content_scroll = 0;
                }
            }
            ActivePane::Articles => {
                if self.article_index > 0 {
                    self.article_index -= 1;
                    self.content_scroll = 0;
                }
            }
            ActivePane::Content => {
                self.content_scroll = self.content_scroll.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.active_pane {
            ActivePane::Subscriptions => {
                if !self.subscriptions.is_empty()
                    && self.subscription_index < self.subscriptions.len() - 1
                {
                    self.subscription_index += 1;
                    self.article_index = 0;
                    self.content_scroll = 0;
                }
            }
            ActivePane::Articles => {
                let len = self.current_articles().len();
                if len > 0 && self.article_index < len - 1 {
                    self.article_index += 1;
                    self.content_scroll = 0;
                }
            }
            ActivePane::Content => {
                self.content_scroll = self.content_scroll.saturating_add(1);
            }
        }
    }

    pub fn clamp_selection(&mut self) {
        if self.subscription_index >= self.subscriptions.len() {
            self.subscription_index = self.subscriptions.len().saturating_sub(1);
        }
    }

    pub fn enter_input(&mut self, mode: InputMode, initial: &str) {
        self.input_mode = mode;
        self.input = initial.to_string();
        self.suggestions.clear();
    }

    pub fn leave_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
        self.suggestions.clear();
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
