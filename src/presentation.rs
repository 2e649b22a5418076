// =============================================================================
// Presentation consumer — the single renderer task
// =============================================================================
//
// Stand-in for a GUI front end: one task owns all rendering and is the only
// consumer of the event channel, so presentation state is never touched from
// a background pipeline.  When several loads race, events simply arrive in
// completion order and the last one wins.

use tracing::{error, info};

use crate::events::{EngineEvent, EventReceiver};

/// Drain the event channel until every sender is gone.
pub async fn run_event_loop(mut rx: EventReceiver) {
    while let Some(event) = rx.recv().await {
        render(&event);
    }
    info!("event channel closed — presentation loop exiting");
}

fn render(event: &EngineEvent) {
    match event {
        EngineEvent::IndicatorsReady(set) => {
            info!(rsi = %set.rsi, macd = %set.macd, ema = %set.ema, sma = %set.sma, "indicators");
        }
        EngineEvent::OverallReady(overall) => {
            info!(recommendation = %overall, "overall");
        }
        EngineEvent::ChartDataReady { symbol, series, frame } => {
            let first = series.bars().first().map(|b| b.timestamp.to_string());
            let last = series.last().map(|b| b.timestamp.to_string());
            let last_close = series.last().map(|b| b.close).unwrap_or_default();
            info!(
                symbol = %symbol,
                bars = series.len(),
                rows = frame.len(),
                from = ?first,
                to = ?last,
                last_close,
                "chart data ready"
            );
        }
        EngineEvent::ScanReportReady(report) => {
            for line in report.lines() {
                info!(scan = %line, "scan report");
            }
        }
        EngineEvent::FetchFailed { symbol } => {
            error!(symbol = %symbol, "error loading data");
        }
    }
}
