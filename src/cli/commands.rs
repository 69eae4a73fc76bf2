use crate::app::{AppContext, Result};
use crate::domain::Subscription;
use crate::fetcher::FetchOutcome;

pub fn add_subscription(ctx: &AppContext, url: &str, title: Option<&str>) -> Result<()> {
    let sub = match title {
        Some(title) => Subscription::with_title(url, title),
        None => Subscription::new(url),
    };

    if ctx.store.add(sub)? {
        println!("Added subscription: {}", url);
    } else {
        println!("Subscription already exists: {}", url);
    }
    Ok(())
}

pub fn remove_subscription(ctx: &AppContext, url: &str) -> Result<()> {
    ctx.store.remove(url)?;
    println!("Removed subscription: {}", url);
    Ok(())
}

pub fn rename_subscription(ctx: &AppContext, url: &str, title: &str) -> Result<()> {
    ctx.store.rename(url, title)?;
    println!("Renamed {} to \"{}\"", url, title);
    Ok(())
}

pub fn list_subscriptions(ctx: &AppContext) -> Result<()> {
    let subs = ctx.store.load()?;

    if subs.is_empty() {
        println!("No subscriptions");
        return Ok(());
    }

    for sub in subs {
        println!("{}\n  {}", sub.display_title(), sub.feed_url);
    }
    Ok(())
}

pub async fn fetch_feed(ctx: &AppContext, url: &str) -> Result<()> {
    match ctx.fetcher.fetch(url).await {
        FetchOutcome::Fetched(articles) => {
            if articles.is_empty() {
                println!("Feed has no entries");
                return Ok(());
            }
            for article in articles {
                println!("{}", article.display_title());
                if !article.link.is_empty() {
                    println!("  {}", article.link);
                }
                let body = article.display_content();
                if !body.is_empty() {
                    println!("  {}", body);
                }
            }
        }
        FetchOutcome::Failed(failure) => {
            // Same placeholder row the panel would show.
            println!("{}", failure.placeholder().title);
        }
    }
    Ok(())
}

pub async fn refresh_all(ctx: &AppContext) -> Result<()> {
    let subs = ctx.store.load()?;

    if subs.is_empty() {
        println!("No subscriptions to refresh");
        return Ok(());
    }

    println!("Refreshing {} subscriptions...", subs.len());
    let results = ctx.parallel_fetcher.fetch_all(&subs).await;

    let mut failures = 0;
    for (url, outcome) in results {
        match outcome {
            FetchOutcome::Fetched(articles) => {
                println!("  {} articles from {}", articles.len(), url);
            }
            FetchOutcome::Failed(failure) => {
                failures += 1;
                eprintln!("  {} failed: {}", url, failure.message);
            }
        }
    }

    if failures > 0 {
        println!("Refresh complete ({} failures)", failures);
    } else {
        println!("Refresh complete");
    }
    Ok(())
}

pub fn suggest_feeds(ctx: &AppContext, query: &str) -> Result<()> {
    let hits = ctx.directory.suggest(query);

    if hits.is_empty() {
        println!("No matches for \"{}\"", query);
        return Ok(());
    }

    for entry in hits {
        println!("{}\n  {}", entry.title, entry.feed_url);
    }
    Ok(())
}
