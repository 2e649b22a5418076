// =============================================================================
// Single-ticker pipeline — fetch, derive, classify, emit
// =============================================================================
//
// One isolated unit of work, run on its own task so the presentation loop
// stays responsive.  The series and frame are owned here and moved into the
// chart event; nothing is shared with other pipelines.  There are no
// retries: any fetch failure becomes a single FetchFailed event.

use tracing::{info, warn};

use crate::events::{EngineEvent, EventSender};
use crate::indicators::IndicatorFrame;
use crate::market_data::SeriesFetcher;
use crate::signals::classify;

/// Load one ticker and emit indicator signals, the overall recommendation,
/// and the chart payload.
pub async fn load_symbol<F: SeriesFetcher>(fetcher: &F, symbol: &str, tx: &EventSender) {
    let series = match fetcher.fetch(symbol).await {
        Ok(series) if !series.is_empty() => series,
        Ok(_) => {
            warn!(symbol, "fetch returned no bars");
            let _ = tx.send(EngineEvent::FetchFailed {
                symbol: symbol.to_string(),
            });
            return;
        }
        Err(e) => {
            warn!(symbol, error = %e, "fetch failed");
            let _ = tx.send(EngineEvent::FetchFailed {
                symbol: symbol.to_string(),
            });
            return;
        }
    };

    let frame = IndicatorFrame::compute(&series.closes());
    let signals = classify(&frame);
    let overall = signals.overall();

    info!(
        symbol,
        bars = series.len(),
        rsi = %signals.rsi,
        macd = %signals.macd,
        ema = %signals.ema,
        sma = %signals.sma,
        overall = %overall,
        "ticker classified"
    );

    let _ = tx.send(EngineEvent::IndicatorsReady(signals));
    let _ = tx.send(EngineEvent::OverallReady(overall));
    let _ = tx.send(EngineEvent::ChartDataReady {
        symbol: symbol.to_string(),
        series,
        frame,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::error::FetchError;
    use crate::market_data::{PriceBar, PriceSeries};
    use crate::types::Signal;

    /// Stub fetcher: ascending closes for known symbols, Api error otherwise.
    struct StubFetcher {
        known: Vec<String>,
    }

    #[async_trait]
    impl SeriesFetcher for StubFetcher {
        async fn fetch(&self, symbol: &str) -> Result<PriceSeries, FetchError> {
            if symbol == "EMPT" {
                Ok(PriceSeries::from_bars(Vec::new()))
            } else if self.known.iter().any(|s| s == symbol) {
                Ok(series_from_closes(&(10..=30).map(|x| x as f64).collect::<Vec<_>>()))
            } else {
                Err(FetchError::Api(format!("{symbol}: unknown symbol")))
            }
        }
    }

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                timestamp: start + chrono::Duration::hours(i as i64),
                open: close,
                high: close + 0.5,
                low: close - 0.5,
                close,
                volume: 1000.0,
            })
            .collect();
        PriceSeries::from_bars(bars)
    }

    #[tokio::test]
    async fn successful_load_emits_three_events_in_order() {
        let fetcher = StubFetcher {
            known: vec!["AAPL".into()],
        };
        let (tx, mut rx) = crate::events::channel();

        load_symbol(&fetcher, "AAPL", &tx).await;
        drop(tx);

        match rx.recv().await {
            Some(EngineEvent::IndicatorsReady(set)) => assert_eq!(set.buy_count(), 3),
            other => panic!("expected IndicatorsReady, got {other:?}"),
        }
        match rx.recv().await {
            Some(EngineEvent::OverallReady(overall)) => assert_eq!(overall, Signal::Buy),
            other => panic!("expected OverallReady, got {other:?}"),
        }
        match rx.recv().await {
            Some(EngineEvent::ChartDataReady { symbol, series, frame }) => {
                assert_eq!(symbol, "AAPL");
                assert_eq!(series.len(), 21);
                assert_eq!(frame.len(), 21);
            }
            other => panic!("expected ChartDataReady, got {other:?}"),
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn failed_fetch_emits_only_fetch_failed() {
        let fetcher = StubFetcher { known: Vec::new() };
        let (tx, mut rx) = crate::events::channel();

        load_symbol(&fetcher, "ZZZZ", &tx).await;
        drop(tx);

        match rx.recv().await {
            Some(EngineEvent::FetchFailed { symbol }) => assert_eq!(symbol, "ZZZZ"),
            other => panic!("expected FetchFailed, got {other:?}"),
        }
        // No signals and no chart payload after a failure.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn empty_series_counts_as_a_failed_fetch() {
        let fetcher = StubFetcher { known: Vec::new() };
        let (tx, mut rx) = crate::events::channel();

        load_symbol(&fetcher, "EMPT", &tx).await;
        drop(tx);

        assert!(matches!(
            rx.recv().await,
            Some(EngineEvent::FetchFailed { .. })
        ));
        assert!(rx.recv().await.is_none());
    }
}
