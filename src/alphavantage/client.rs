// =============================================================================
// Alpha Vantage REST API client
// =============================================================================
//
// Fetches TIME_SERIES_INTRADAY (60min) payloads and turns them into ordered
// `PriceSeries` values.  The API key travels as a query parameter; the key
// is injected at construction and never logged.
//
// Alpha Vantage error reporting is unusual: failures come back as HTTP 200
// with one of three top-level keys ("Error Message", "Note", "Information")
// instead of the time-series object.  All three collapse to
// `FetchError::Api`.
// =============================================================================

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::{debug, instrument, warn};

use crate::error::FetchError;
use crate::market_data::{PriceBar, PriceSeries, SeriesFetcher};

/// Bar interval requested from the API. The whole engine works on hourly bars.
const INTERVAL: &str = "60min";

/// JSON key under which the bar map lives for the 60min interval.
const SERIES_KEY: &str = "Time Series (60min)";

/// Timestamp format used by Alpha Vantage (exchange-local, no offset).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Alpha Vantage intraday price client.
#[derive(Clone)]
pub struct AlphaVantageClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl AlphaVantageClient {
    /// Create a new client.  `api_key` is read from configuration once at
    /// startup and passed in here — it is never a process-wide global.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build reqwest client");

        debug!("AlphaVantageClient initialised (base_url=https://www.alphavantage.co)");

        Self {
            api_key: api_key.into(),
            base_url: "https://www.alphavantage.co".to_string(),
            client,
        }
    }

    /// GET /query?function=TIME_SERIES_INTRADAY for one symbol.
    #[instrument(skip(self), name = "alphavantage::fetch_intraday")]
    pub async fn fetch_intraday(&self, symbol: &str) -> Result<PriceSeries, FetchError> {
        let url = format!(
            "{}/query?function=TIME_SERIES_INTRADAY&symbol={}&interval={}&outputsize=compact&apikey={}",
            self.base_url, symbol, INTERVAL, self.api_key
        );

        let body: serde_json::Value = self.client.get(&url).send().await?.json().await?;

        let series = parse_intraday_response(symbol, &body)?;
        debug!(symbol, bars = series.len(), "intraday series fetched");
        Ok(series)
    }
}

#[async_trait]
impl SeriesFetcher for AlphaVantageClient {
    async fn fetch(&self, symbol: &str) -> Result<PriceSeries, FetchError> {
        self.fetch_intraday(symbol).await
    }
}

// The key must never appear in logs or debug dumps.
impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Payload parsing
// -----------------------------------------------------------------------------

/// Parse a TIME_SERIES_INTRADAY response body into an ordered series.
///
/// Expected shape:
/// ```json
/// {
///   "Meta Data": { ... },
///   "Time Series (60min)": {
///     "2024-01-02 16:00:00": {
///       "1. open": "185.5200", "2. high": "186.0000", "3. low": "185.2000",
///       "4. close": "185.6400", "5. volume": "302818"
///     },
///     ...
///   }
/// }
/// ```
/// Individual malformed entries are skipped with a warning; the whole payload
/// is rejected only when the series object is missing or nothing parses.
fn parse_intraday_response(
    symbol: &str,
    body: &serde_json::Value,
) -> Result<PriceSeries, FetchError> {
    // API-level refusals come back as HTTP 200 with an explanatory key.
    for key in ["Error Message", "Note", "Information"] {
        if let Some(msg) = body.get(key).and_then(|v| v.as_str()) {
            return Err(FetchError::Api(format!("{symbol}: {msg}")));
        }
    }

    let entries = body
        .get(SERIES_KEY)
        .and_then(|v| v.as_object())
        .ok_or_else(|| {
            FetchError::Malformed(format!("{symbol}: missing '{SERIES_KEY}' object"))
        })?;

    let mut bars = Vec::with_capacity(entries.len());

    for (stamp, fields) in entries {
        match parse_bar(stamp, fields) {
            Ok(bar) => bars.push(bar),
            Err(e) => {
                warn!(symbol, stamp = %stamp, error = %e, "skipping malformed bar");
            }
        }
    }

    if bars.is_empty() {
        return Err(FetchError::Empty(symbol.to_string()));
    }

    Ok(PriceSeries::from_bars(bars))
}

/// Parse one `"timestamp" -> { "1. open": ..., ... }` entry.
fn parse_bar(stamp: &str, fields: &serde_json::Value) -> Result<PriceBar, FetchError> {
    let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .map_err(|e| FetchError::Malformed(format!("bad timestamp '{stamp}': {e}")))?;

    Ok(PriceBar {
        timestamp,
        open: parse_field(fields, "1. open")?,
        high: parse_field(fields, "2. high")?,
        low: parse_field(fields, "3. low")?,
        close: parse_field(fields, "4. close")?,
        volume: parse_field(fields, "5. volume")?,
    })
}

/// Alpha Vantage sends every numeric field as a JSON string.
fn parse_field(fields: &serde_json::Value, name: &str) -> Result<f64, FetchError> {
    let raw = fields
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| FetchError::Malformed(format!("missing field '{name}'")))?;

    raw.parse::<f64>()
        .map_err(|_| FetchError::Malformed(format!("field '{name}' is not a number: '{raw}'")))
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
