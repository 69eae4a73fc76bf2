pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedpane")]
#[command(about = "An RSS/Atom feed reader panel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a subscription
    Add {
        /// Feed URL to subscribe to
        url: String,
        /// Display title (defaults to the URL)
        #[arg(short, long)]
        title: Option<String>,
    },
    /// Remove a subscription
    Remove {
        /// Feed URL to remove
        url: String,
    },
    /// Change a subscription's display title
    Rename {
        /// Feed URL of the subscription
        url: String,
        /// New display title
        title: String,
    },
    /// List subscriptions
    List,
    /// Fetch one feed and print its articles
    Fetch {
        /// Feed URL to fetch
        url: String,
    },
    /// Fetch every subscription and print a summary
    Refresh,
    /// Suggest feed URLs from the bundled directory
    Suggest {
        /// Substring to match against titles and URLs
        query: String,
    },
    /// Launch the TUI panel
    Tui,
}
