use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feedpane::app::AppContext;
use feedpane::cli::{commands, Cli, Commands};
use feedpane::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(&config)?;

    match cli.command {
        Commands::Add { url, title } => {
            commands::add_subscription(&ctx, &url, title.as_deref())?;
        }
        Commands::Remove { url } => {
            commands::remove_subscription(&ctx, &url)?;
        }
        Commands::Rename { url, title } => {
            commands::rename_subscription(&ctx, &url, &title)?;
        }
        Commands::List => {
            commands::list_subscriptions(&ctx)?;
        }
        Commands::Fetch { url } => {
            commands::fetch_feed(&ctx, &url).await?;
        }
        Commands::Refresh => {
            commands::refresh_all(&ctx).await?;
        }
        Commands::Suggest { query } => {
            commands::suggest_feeds(&ctx, &query)?;
        }
        Commands::Tui => {
            feedpane::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
