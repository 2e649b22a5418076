// =============================================================================
// Price series — ordered OHLCV history for one ticker
// =============================================================================
//
// A `PriceSeries` is the unit of work for the whole engine: fetched once,
// handed to the indicator engine, then moved into the chart event.  The
// constructor enforces the ordering invariant (strictly increasing
// timestamps, no duplicates) so everything downstream can assume it.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A single hourly OHLCV bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Chronologically ordered sequence of bars, strictly increasing by
/// timestamp with no duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars in any order.  Bars are sorted ascending by
    /// timestamp; when two bars share a timestamp the later one wins.
    pub fn from_bars(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        bars.dedup_by(|next, prev| {
            if next.timestamp == prev.timestamp {
                // dedup_by drops `next`; keep its values in the survivor.
                *prev = next.clone();
                true
            } else {
                false
            }
        });
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// The close-price column, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// The seam between the engine and whatever supplies price history.
///
/// Production uses [`crate::alphavantage::AlphaVantageClient`]; tests use
/// in-memory stubs.  Any failure (network, API refusal, malformed payload,
/// empty series) surfaces as a single [`FetchError`] — callers treat them
/// all the same way.
#[async_trait]
pub trait SeriesFetcher: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<PriceSeries, FetchError>;
}
