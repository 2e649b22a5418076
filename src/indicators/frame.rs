// =============================================================================
// Indicator frame — per-bar indicator columns aligned to a price series
// =============================================================================
//
// One row per input bar.  Each column is `None` until its indicator's
// warm-up completes; signals are only ever derived from rows where every
// column is defined.

use serde::{Deserialize, Serialize};

use crate::indicators::ema::calculate_ema;
use crate::indicators::macd::calculate_macd;
use crate::indicators::rsi::calculate_rsi;
use crate::indicators::sma::calculate_sma;

/// Default look-back parameters for the four indicators.
pub const EMA_SPAN: usize = 20;
pub const SMA_WINDOW: usize = 10;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL_SPAN: usize = 9;

/// Aligned indicator columns over a close-price series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub close: Vec<f64>,
    pub ema: Vec<Option<f64>>,
    pub sma: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

/// One fully-defined frame row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    pub close: f64,
    pub ema: f64,
    pub sma: f64,
    pub rsi: f64,
    pub macd: f64,
    pub signal: f64,
}

impl IndicatorFrame {
    /// Derive all indicator columns from a close-price series.
    ///
    /// Pure: identical input always produces identical output.
    pub fn compute(closes: &[f64]) -> Self {
        let ema = calculate_ema(closes, EMA_SPAN).into_iter().map(Some).collect();
        let sma = calculate_sma(closes, SMA_WINDOW);
        let rsi = calculate_rsi(closes, RSI_PERIOD);

        let macd_series = calculate_macd(closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL_SPAN);
        let macd = macd_series.macd.into_iter().map(Some).collect();
        let signal = macd_series.signal.into_iter().map(Some).collect();

        Self {
            close: closes.to_vec(),
            ema,
            sma,
            rsi,
            macd,
            signal,
        }
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// The most recent row where every indicator is defined, if any.
    ///
    /// Warm-up rows and undefined-RSI rows (flat windows) never qualify, so
    /// a too-short or fully flat series yields `None`.
    pub fn latest_complete(&self) -> Option<FrameRow> {
        (0..self.len()).rev().find_map(|i| self.row(i))
    }

    fn row(&self, i: usize) -> Option<FrameRow> {
        Some(FrameRow {
            close: *self.close.get(i)?,
            ema: (*self.ema.get(i)?)?,
            sma: (*self.sma.get(i)?)?,
            rsi: (*self.rsi.get(i)?)?,
            macd: (*self.macd.get(i)?)?,
            signal: (*self.signal.get(i)?)?,
        })
    }
}
