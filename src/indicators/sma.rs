// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Trailing arithmetic mean of the last `window` closes.  The first
// `window - 1` rows have no full window behind them and are `None`.

/// Compute the SMA column for the given `closes` and `window`.
///
/// The output is aligned to the input (same length); warm-up rows are
/// `None`.  A zero window yields all-`None`.
pub fn calculate_sma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; closes.len()];
    }

    let mut result = vec![None; closes.len()];
    let mut rolling_sum = 0.0;

    for (i, &close) in closes.iter().enumerate() {
        rolling_sum += close;
        if i >= window {
            rolling_sum -= closes[i - window];
        }
        if i + 1 >= window {
            result[i] = Some(rolling_sum / window as f64);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_empty_input() {
        assert!(calculate_sma(&[], 10).is_empty());
    }

    #[test]
    fn sma_window_zero() {
        assert_eq!(calculate_sma(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn sma_warm_up_rows_are_none() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let sma = calculate_sma(&closes, 10);
        assert_eq!(sma.len(), 20);
        assert!(sma[..9].iter().all(Option::is_none));
        assert!(sma[9..].iter().all(Option::is_some));
    }

    #[test]
    fn sma_known_values() {
        let closes: Vec<f64> = (1..=12).map(|x| x as f64).collect();
        let sma = calculate_sma(&closes, 10);
        // mean(1..=10) = 5.5, then the window slides by one.
        assert!((sma[9].unwrap() - 5.5).abs() < 1e-12);
        assert!((sma[10].unwrap() - 6.5).abs() < 1e-12);
        assert!((sma[11].unwrap() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn sma_window_equals_length() {
        let sma = calculate_sma(&[2.0, 4.0, 6.0], 3);
        assert_eq!(sma, vec![None, None, Some(4.0)]);
    }
}
