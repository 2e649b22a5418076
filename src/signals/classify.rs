// =============================================================================
// Signal classification — thresholds and majority vote
// =============================================================================
//
// Per-indicator rules, each evaluated independently on the latest complete
// indicator row:
//   RSI:  BUY below 30, SELL above 70, HOLD between.
//   MACD: BUY when MACD is above its signal line, SELL below, HOLD on a tie.
//   EMA:  BUY when close is above the EMA, otherwise SELL (no HOLD branch;
//         equality counts as SELL).
//   SMA:  same two-way policy as EMA.
//
// Overall: 3+ BUYs => BUY, 0-1 BUYs => SELL, exactly 2 => HOLD.

use serde::{Deserialize, Serialize};

use crate::indicators::{FrameRow, IndicatorFrame};
use crate::types::Signal;

/// Number of BUY votes required for a BUY recommendation (and for a ticker
/// to show up in a scan report).
pub const BUY_VOTE_THRESHOLD: usize = 3;

/// One signal per indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub rsi: Signal,
    pub macd: Signal,
    pub ema: Signal,
    pub sma: Signal,
}

impl SignalSet {
    /// The fail-soft default: every indicator HOLD.
    pub fn hold() -> Self {
        Self {
            rsi: Signal::Hold,
            macd: Signal::Hold,
            ema: Signal::Hold,
            sma: Signal::Hold,
        }
    }

    /// How many of the four indicators say BUY.
    pub fn buy_count(&self) -> usize {
        [self.rsi, self.macd, self.ema, self.sma]
            .iter()
            .filter(|&&s| s == Signal::Buy)
            .count()
    }

    /// Majority-vote recommendation.
    pub fn overall(&self) -> Signal {
        match self.buy_count() {
            n if n >= BUY_VOTE_THRESHOLD => Signal::Buy,
            2 => Signal::Hold,
            _ => Signal::Sell,
        }
    }
}

impl Default for SignalSet {
    fn default() -> Self {
        Self::hold()
    }
}

/// Classify the most recent complete row of `frame`.
///
/// When no row is complete (short history, or a flat series whose RSI never
/// defines) the all-HOLD default is returned instead of an error.
pub fn classify(frame: &IndicatorFrame) -> SignalSet {
    match frame.latest_complete() {
        Some(row) => classify_row(&row),
        None => SignalSet::hold(),
    }
}

fn classify_row(row: &FrameRow) -> SignalSet {
    let rsi = if row.rsi < 30.0 {
        Signal::Buy
    } else if row.rsi > 70.0 {
        Signal::Sell
    } else {
        Signal::Hold
    };

    let macd = if row.macd > row.signal {
        Signal::Buy
    } else if row.macd < row.signal {
        Signal::Sell
    } else {
        Signal::Hold
    };

    let ema = if row.close > row.ema {
        Signal::Buy
    } else {
        Signal::Sell
    };

    let sma = if row.close > row.sma {
        Signal::Buy
    } else {
        Signal::Sell
    };

    SignalSet {
        rsi,
        macd,
        ema,
        sma,
    }
}
