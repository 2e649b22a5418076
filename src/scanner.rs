// =============================================================================
// Watch-list scanner — sequential majority-BUY sweep
// =============================================================================
//
// Walks a fixed ticker list in order, classifies each one, and collects the
// tickers where at least 3 of the 4 indicators say BUY.  A fixed delay is
// slept between consecutive tickers to respect the upstream request quota —
// also after a failed fetch, since the quota counts those too.
//
// A ticker that fails to fetch is skipped; the scan always runs to the end
// of the list.  The scanner keeps no state between runs.

use std::time::Duration;

use tracing::{info, warn};

use crate::events::{EngineEvent, EventSender};
use crate::indicators::IndicatorFrame;
use crate::market_data::SeriesFetcher;
use crate::signals::{classify, BUY_VOTE_THRESHOLD};

/// Report line emitted when every ticker is skipped or below threshold.
/// The exact wording is a contract with the presentation layer.
pub const NO_MATCH_REPORT: &str = "No strong BUY signals found.";

/// Scan `watchlist` and emit (and return) the joined report.
pub async fn run_scan<F: SeriesFetcher>(
    fetcher: &F,
    watchlist: &[String],
    delay: Duration,
    tx: &EventSender,
) -> String {
    info!(tickers = watchlist.len(), "scan started");
    let mut matches = Vec::new();

    for (i, symbol) in watchlist.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(delay).await;
        }

        let series = match fetcher.fetch(symbol).await {
            Ok(series) if !series.is_empty() => series,
            Ok(_) => {
                warn!(symbol = %symbol, "no bars returned — skipping ticker");
                continue;
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "skipping ticker");
                continue;
            }
        };

        let frame = IndicatorFrame::compute(&series.closes());
        let buy_count = classify(&frame).buy_count();
        info!(symbol = %symbol, buy_count, "ticker scanned");

        if buy_count >= BUY_VOTE_THRESHOLD {
            matches.push(format!("{symbol}: {buy_count}/4 indicators say BUY"));
        }
    }

    let report = if matches.is_empty() {
        NO_MATCH_REPORT.to_string()
    } else {
        matches.join("\n")
    };

    info!(matches = matches.len(), "scan finished");
    let _ = tx.send(EngineEvent::ScanReportReady(report.clone()));
    report
}
