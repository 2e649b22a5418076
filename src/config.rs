// =============================================================================
// Scanner configuration
// =============================================================================
//
// Read once at startup from an optional JSON file, then overridden from the
// environment in main.  The API key lives here and is handed to the fetcher's
// constructor — it is never a process-wide mutable global.
//
// Every field carries `#[serde(default)]` so adding new fields never breaks
// loading an older config file.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_symbol() -> String {
    "AAPL".to_string()
}

fn default_watchlist() -> Vec<String> {
    [
        "AAPL", "GOOG", "MSFT", "AMZN", "META", "TSLA", "NVDA", "JPM", "NFLX", "BRK-B",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_scan_delay_secs() -> u64 {
    15
}

// =============================================================================
// ScannerConfig
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Alpha Vantage API key.  Usually supplied via ALPHAVANTAGE_API_KEY.
    #[serde(default)]
    pub api_key: String,

    /// Ticker loaded on startup.
    #[serde(default = "default_symbol")]
    pub default_symbol: String,

    /// Tickers swept by the scan mode, in order.
    #[serde(default = "default_watchlist")]
    pub watchlist: Vec<String>,

    /// Seconds slept between consecutive scan requests (upstream quota).
    #[serde(default = "default_scan_delay_secs")]
    pub scan_delay_secs: u64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_symbol: default_symbol(),
            watchlist: default_watchlist(),
            scan_delay_secs: default_scan_delay_secs(),
        }
    }
}

impl ScannerConfig {
    /// Load from a JSON file.  Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        info!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
