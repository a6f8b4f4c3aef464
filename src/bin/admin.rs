//! CLI administration tool for edge-shortener.
//!
//! Reads the same store the server uses, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # List the most recent links with click counts
//! cargo run --bin admin -- links --limit 20
//!
//! # Country breakdown for one link
//! cargo run --bin admin -- stats aB3x_9
//!
//! # Check the configured store
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORE_BACKEND` plus the matching connection settings.
//! With the default `memory` backend there is nothing to inspect.

use edge_shortener::application::services::{ClickService, LinkService, StatsService};
use edge_shortener::config;
use edge_shortener::domain::analytics::country_flag;
use edge_shortener::infrastructure::persistence::{KvClickRepository, KvLinkRepository};
use edge_shortener::infrastructure::store::{self, KvStore};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

type Stats = StatsService<KvLinkRepository, KvClickRepository>;

/// CLI tool for inspecting edge-shortener data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List indexed links, newest first
    Links {
        /// Maximum number of links to show
        #[arg(short, long, default_value_t = Stats::DASHBOARD_LIMIT)]
        limit: usize,
    },

    /// Show click statistics for one link
    Stats {
        /// Short code
        code: String,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let store = store::connect(&config).await?;

    let links = Arc::new(LinkService::new(Arc::new(KvLinkRepository::new(
        store.clone(),
    ))));
    let clicks = Arc::new(ClickService::new(
        Arc::new(KvClickRepository::new(store.clone())),
        config.click_log_capacity,
    ));
    let stats = StatsService::new(links, clicks);

    match cli.command {
        Commands::Links { limit } => list_links(&stats, limit).await?,
        Commands::Stats { code } => show_stats(&stats, &code).await?,
        Commands::Store { action } => match action {
            StoreAction::Check => check_store(store.as_ref()).await?,
        },
    }

    Ok(())
}

/// Prints indexed links with their click counts.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code    Clicks  Created           URL
///   ──────────────────────────────────────────────────────────────────
///   aB3x_9  12      2025-03-05 14:07  https://example.com/some/long/path
/// ```
async fn list_links(stats: &Stats, limit: usize) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let dashboard = stats
        .get_dashboard(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load links: {}", e))?;

    if dashboard.entries.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<7} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for entry in &dashboard.entries {
        println!(
            "  {:<7} {:<7} {:<17} {}",
            entry.link.code.cyan(),
            entry.clicks.to_string().bright_green(),
            entry
                .link
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            entry.link.url
        );
    }

    println!();
    println!(
        "  Links: {}  Clicks: {}",
        dashboard.total_links.to_string().bright_white().bold(),
        dashboard.total_clicks.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the link, its total clicks, and the country breakdown.
async fn show_stats(stats: &Stats, code: &str) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let link_stats = stats
        .get_link_stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("  Code:    {}", link_stats.link.code.cyan());
    println!("  URL:     {}", link_stats.link.url);
    println!(
        "  Created: {}",
        link_stats
            .link
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  Clicks:  {}",
        link_stats.total_clicks.to_string().bright_green().bold()
    );
    println!();

    if link_stats.countries.is_empty() {
        println!("{}", "  No clicks yet".yellow());
        return Ok(());
    }

    for country in &link_stats.countries {
        println!(
            "  {} {:<10} {:>6}  {:>5.1}%",
            country_flag(Some(&country.country)),
            country.country,
            country.count,
            country.percentage
        );
    }
    println!();

    Ok(())
}

/// Pings the configured store.
async fn check_store(store: &dyn KvStore) -> Result<()> {
    println!("{}", "🔍 Checking store connection...".bright_blue());

    if store.health_check().await {
        println!(
            "{}",
            format!("✅ {} store reachable", store.backend_name())
                .green()
                .bold()
        );

        let keys = store
            .list("")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list keys: {}", e))?;
        println!("  Keys: {}", keys.len().to_string().bright_white().bold());
        println!();

        Ok(())
    } else {
        println!(
            "{}",
            format!("❌ {} store unreachable", store.backend_name())
                .red()
                .bold()
        );
        anyhow::bail!("Store health check failed")
    }
}
