//! # feedpane
//!
//! An RSS/Atom feed reader panel: a curated list of subscriptions, an
//! on-demand fetch pipeline, and a terminal UI with an article list and
//! content viewer.
//!
//! ## Architecture
//!
//! The core is a stateless pipeline:
//!
//! ```text
//! Transport → Normalizer (parse + strip) → FetchOutcome
//! ```
//!
//! - [`fetcher`]: HTTP transport and the fetch/failure orchestration
//! - [`normalizer`]: RSS/Atom parsing and markup stripping
//! - [`store`]: subscription persistence over key/value storage
//! - [`directory`]: bundled feed directory for URL autocomplete
//! - [`tui`]: terminal panel built with ratatui
//!
//! Every failure mode of a fetch — transport errors, non-2xx statuses,
//! unparseable bodies — is folded into [`fetcher::FetchOutcome`] rather
//! than raised, so the presentation layer can always render something.
//!
//! ## Quick start
//!
//! ```bash
//! # Subscribe to a feed
//! feedpane add https://blog.rust-lang.org/feed.xml
//!
//! # Print a feed's articles
//! feedpane fetch https://blog.rust-lang.org/feed.xml
//!
//! # Autocomplete from the bundled directory
//! feedpane suggest rust
//!
//! # Launch the panel
//! feedpane tui
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together the subscription store,
/// the fetch pipeline, and the feed directory.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/feedpane/config.toml`.
pub mod config;

/// Bundled per-language feed directory powering URL suggestions.
pub mod directory;

/// Core domain models: [`Article`](domain::Article) and
/// [`Subscription`](domain::Subscription).
pub mod domain;

/// Fetch pipeline: the [`Transport`](fetcher::Transport) seam, the
/// reqwest-backed implementation, failure classification, and the
/// semaphore-bounded parallel refresher.
pub mod fetcher;

/// Feed parsing and normalization.
///
/// Converts RSS 0.9x/1.0/2.0 and Atom documents into markup-free
/// [`Article`](domain::Article) records.
pub mod normalizer;

/// Subscription persistence: a key/value storage seam with file and
/// in-memory backends, and the pipe-delimited subscription codec.
pub mod store;

/// Terminal user interface.
///
/// Panes for subscriptions, articles, and content; fetches run on
/// background tasks and report back over the event channel.
pub mod tui;
