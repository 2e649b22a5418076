// =============================================================================
// Vantage Signal Scanner — Main Entry Point
// =============================================================================
//
// Wires the engine together: config, Alpha Vantage client, the
// engine→presentation event channel, an initial single-ticker load, and a
// watch-list scan.  Both pipelines run as isolated background tasks; the
// presentation loop is their only observer.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod alphavantage;
mod config;
mod engine;
mod error;
mod events;
mod indicators;
mod market_data;
mod presentation;
mod scanner;
mod signals;
mod types;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::alphavantage::AlphaVantageClient;
use crate::config::ScannerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Vantage Signal Scanner starting up");

    let mut config = ScannerConfig::load("scanner_config.json").unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        ScannerConfig::default()
    });

    // Environment overrides.
    if let Ok(key) = std::env::var("ALPHAVANTAGE_API_KEY") {
        config.api_key = key;
    }
    if let Ok(symbol) = std::env::var("SCANNER_SYMBOL") {
        config.default_symbol = symbol.trim().to_uppercase();
    }
    if let Ok(syms) = std::env::var("SCANNER_WATCHLIST") {
        config.watchlist = syms
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
    }

    if config.api_key.is_empty() {
        warn!("No API key configured — set ALPHAVANTAGE_API_KEY; requests will be rejected");
    }

    info!(
        default_symbol = %config.default_symbol,
        watchlist = ?config.watchlist,
        scan_delay_secs = config.scan_delay_secs,
        "configured"
    );

    // ── 2. Client & event channel ────────────────────────────────────────
    let client = Arc::new(AlphaVantageClient::new(config.api_key.clone()));

    let (tx, rx) = events::channel();
    let presentation_task = tokio::spawn(presentation::run_event_loop(rx));

    // ── 3. Initial single-ticker load ────────────────────────────────────
    {
        let client = client.clone();
        let tx = tx.clone();
        let symbol = config.default_symbol.clone();
        tokio::spawn(async move {
            engine::load_symbol(client.as_ref(), &symbol, &tx).await;
        });
    }

    // ── 4. Watch-list scan ───────────────────────────────────────────────
    {
        let client = client.clone();
        let tx = tx.clone();
        let watchlist = config.watchlist.clone();
        let delay = Duration::from_secs(config.scan_delay_secs);
        tokio::spawn(async move {
            scanner::run_scan(client.as_ref(), &watchlist, delay, &tx).await;
        });
    }

    info!("Pipelines running. Press Ctrl+C to stop.");

    // ── 5. Shutdown ──────────────────────────────────────────────────────
    tokio::signal::ctrl_c().await?;
    warn!("Shutdown signal received — stopping");

    // Dropping the last sender lets the presentation loop drain and exit.
    drop(tx);
    let _ = presentation_task.await;

    info!("Vantage Signal Scanner shut down complete.");
    Ok(())
}
