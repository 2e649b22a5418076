// =============================================================================
// Relative Strength Index (RSI) — rolling-mean averages
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Per-bar deltas from consecutive closes.
// Step 2 — gains = max(delta, 0), losses = max(-delta, 0).
// Step 3 — Average gain / loss = trailing simple mean of the last `period`
//          deltas (a plain rolling window, not Wilder's smoothing).
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// Edge cases:
//   avg_loss == 0, avg_gain > 0  => RSI saturates to 100.
//   avg_loss == avg_gain == 0    => 0/0, RSI undefined => `None`.  A flat
//   price run therefore never produces a classifiable RSI row; downstream
//   falls back to HOLD.
//
// Thresholds:  RSI > 70 => overbought (SELL),  RSI < 30 => oversold (BUY).
// =============================================================================

/// Compute the RSI column for the given `closes` and `period`.
///
/// The output is aligned to the input (same length).  The first `period`
/// rows are `None` (a full window of `period` deltas is needed), as are any
/// rows where both averages are zero.  A zero period yields all-`None`.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return result;
    }

    // Gains and losses aligned to bars; index 0 has no delta.
    let mut gains = vec![0.0; closes.len()];
    let mut losses = vec![0.0; closes.len()];
    for i in 1..closes.len() {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    let period_f = period as f64;
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;

    for i in 1..closes.len() {
        gain_sum += gains[i];
        loss_sum += losses[i];
        if i > period {
            gain_sum -= gains[i - period];
            loss_sum -= losses[i - period];
        }
        if i >= period {
            result[i] = rsi_from_averages(gain_sum / period_f, loss_sum / period_f);
        }
    }

    result
}

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// `None` when both averages are zero (0/0 — no movement in the window).
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        None
    } else if avg_loss == 0.0 {
        Some(100.0)
    } else {
        let rs = avg_gain / avg_loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_empty());
    }

    #[test]
    fn rsi_period_zero() {
        assert_eq!(calculate_rsi(&[1.0, 2.0, 3.0], 0), vec![None, None, None]);
    }

    #[test]
    fn rsi_insufficient_data_is_all_none() {
        // 14 closes => only 13 deltas, not a full 14-delta window.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(calculate_rsi(&closes, 14).iter().all(Option::is_none));
    }

    #[test]
    fn rsi_warm_up_boundary() {
        let closes: Vec<f64> = (1..=16).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        assert!(rsi[..14].iter().all(Option::is_none));
        assert!(rsi[14].is_some());
        assert!(rsi[15].is_some());
    }

    #[test]
    fn rsi_all_gains_saturates_to_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        for v in rsi.iter().flatten() {
            assert!((v - 100.0).abs() < 1e-10, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses_is_zero() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14);
        assert!(rsi[14..].iter().all(Option::is_some));
        for v in rsi.iter().flatten() {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_market_is_undefined() {
        // No movement at all: 0/0 at every bar past warm-up.
        let closes = vec![100.0; 30];
        let rsi = calculate_rsi(&closes, 14);
        assert!(rsi.iter().all(Option::is_none));
    }

    #[test]
    fn rsi_stays_in_range() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        let rsi = calculate_rsi(&closes, 14);
        for v in rsi.iter().flatten() {
            assert!((0.0..=100.0).contains(v), "RSI {v} out of range");
        }
    }

    #[test]
    fn rsi_window_forgets_old_moves() {
        // One early spike, then flat: once the spike leaves the window the
        // averages are 0/0 again and RSI goes back to undefined.
        let mut closes = vec![100.0; 40];
        closes[5] = 110.0;
        let rsi = calculate_rsi(&closes, 14);
        // Bars where the spike's deltas are still inside the window.
        assert!(rsi[14].is_some());
        assert!(rsi[19].is_some());
        // Delta indices 5 and 6; window at bar 21 covers deltas 8..=21.
        assert!(rsi[21].is_none());
    }
}
