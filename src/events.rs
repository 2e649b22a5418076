// =============================================================================
// Engine → presentation event vocabulary
// =============================================================================
//
// Background pipelines never touch the presentation layer directly: they
// emit one of these variants over an unbounded mpsc channel and move on.
// A single consumer task (see presentation.rs) serialises all rendering.
// No value ever flows back into the engine.

use tokio::sync::mpsc;

use crate::indicators::IndicatorFrame;
use crate::market_data::PriceSeries;
use crate::signals::SignalSet;
use crate::types::Signal;

/// Everything the engine can tell the presentation layer.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Per-indicator signals for the most recently loaded ticker.
    IndicatorsReady(SignalSet),
    /// Aggregated recommendation for the most recently loaded ticker.
    OverallReady(Signal),
    /// Price history plus derived indicator columns, ready to chart.
    ChartDataReady {
        symbol: String,
        series: PriceSeries,
        frame: IndicatorFrame,
    },
    /// Finished watch-list scan report (joined lines or the no-match
    /// sentinel).
    ScanReportReady(String),
    /// A fetch failed; the cause is deliberately not distinguished.
    FetchFailed { symbol: String },
}

pub type EventSender = mpsc::UnboundedSender<EngineEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<EngineEvent>;

/// Build the engine→presentation channel.
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
