// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD       = EMA(fast) - EMA(slow)       (fast=12, slow=26)
// Signal     = EMA(signal_span) of MACD    (signal_span=9)
//
// All three EMAs here use the *streaming recurrence*:
//   v[0] = x[0]
//   v[t] = α·x[t] + (1-α)·v[t-1],   α = 2 / (span + 1)
//
// This is a different convention from `ema::calculate_ema` (the weighted
// form used for the standalone EMA indicator): the recurrence anchors on the
// first price instead of renormalising over available history, so warm-up
// values differ.  Both conventions are load-bearing — do not unify them.
// =============================================================================

/// MACD line and its signal line, both aligned to the input closes.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Compute MACD and signal columns for the given `closes`.
///
/// Both outputs have the same length as the input and are defined from the
/// first bar (the recurrence needs no warm-up).  Zero spans yield empty
/// columns.
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_span: usize,
) -> MacdSeries {
    if fast == 0 || slow == 0 || signal_span == 0 {
        return MacdSeries {
            macd: Vec::new(),
            signal: Vec::new(),
        };
    }

    let fast_ema = streaming_ema(closes, fast);
    let slow_ema = streaming_ema(closes, slow);

    let macd: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();

    let signal = streaming_ema(&macd, signal_span);

    MacdSeries { macd, signal }
}

/// Plain exponential recurrence seeded with the first value.
fn streaming_ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut result = Vec::with_capacity(values.len());
    let mut prev = match values.first() {
        Some(&v) => v,
        None => return result,
    };
    result.push(prev);

    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        result.push(prev);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_empty_input() {
        let out = calculate_macd(&[], 12, 26, 9);
        assert!(out.macd.is_empty());
        assert!(out.signal.is_empty());
    }

    #[test]
    fn macd_zero_span_guard() {
        let out = calculate_macd(&[1.0, 2.0], 0, 26, 9);
        assert!(out.macd.is_empty());
    }

    #[test]
    fn macd_aligned_to_input() {
        let closes: Vec<f64> = (1..=40).map(|x| x as f64).collect();
        let out = calculate_macd(&closes, 12, 26, 9);
        assert_eq!(out.macd.len(), 40);
        assert_eq!(out.signal.len(), 40);
    }

    #[test]
    fn macd_starts_at_zero() {
        // Both EMAs are seeded with the first close, so MACD[0] is exactly 0.
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = calculate_macd(&closes, 12, 26, 9);
        assert!(out.macd[0].abs() < 1e-12);
        assert!(out.signal[0].abs() < 1e-12);
    }

    #[test]
    fn rising_trend_puts_macd_above_signal() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = calculate_macd(&closes, 12, 26, 9);
        let last_macd = *out.macd.last().unwrap();
        let last_signal = *out.signal.last().unwrap();
        assert!(last_macd > 0.0);
        assert!(last_macd > last_signal);
    }

    #[test]
    fn falling_trend_puts_macd_below_signal() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let out = calculate_macd(&closes, 12, 26, 9);
        let last_macd = *out.macd.last().unwrap();
        let last_signal = *out.signal.last().unwrap();
        assert!(last_macd < 0.0);
        assert!(last_macd < last_signal);
    }

    #[test]
    fn streaming_recurrence_known_values() {
        // span=3 => alpha=0.5: 1, 1.5, 2.25
        let ema = streaming_ema(&[1.0, 2.0, 3.0], 3);
        assert!((ema[0] - 1.0).abs() < 1e-12);
        assert!((ema[1] - 1.5).abs() < 1e-12);
        assert!((ema[2] - 2.25).abs() < 1e-12);
    }

    #[test]
    fn streaming_form_differs_from_weighted_form_during_warm_up() {
        // Same span, same input: the recurrence (seeded on the first price)
        // and the renormalised weighted mean must disagree while history is
        // short.  weighted t1 = 5/3, streaming t1 = 1.5.
        let closes = [1.0, 2.0, 3.0];
        let weighted = crate::indicators::ema::calculate_ema(&closes, 3);
        let streaming = streaming_ema(&closes, 3);
        assert!((weighted[1] - streaming[1]).abs() > 1e-3);
        assert!((weighted[2] - streaming[2]).abs() > 1e-3);
    }
}
