// =============================================================================
// Exponential Moving Average (EMA) — history-weighted form
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// This is the *weighted-average* form: every value is a normalised weighted
// mean of all history available up to that bar, where price[t-k] carries
// weight (1-α)^k and α = 2 / (span + 1).  Because the weights are
// renormalised while history is still short, warm-up values differ from the
// plain recurrence used for MACD (see macd.rs) — the two converge as history
// grows but are deliberately kept as separate implementations, since the
// signal thresholds were tuned against these exact numerics.
//
// Computed streaming:
//   num[t] = price[t] + (1-α) * num[t-1]
//   den[t] = 1        + (1-α) * den[t-1]
//   EMA[t] = num[t] / den[t]
// =============================================================================

/// Compute the history-weighted EMA for the given `closes` and `span`.
///
/// The output has the same length as the input and is defined from the first
/// bar (there is no warm-up gap in this form).  Returns an empty `Vec` when
/// `span == 0`.
pub fn calculate_ema(closes: &[f64], span: usize) -> Vec<f64> {
    if span == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;

    let mut result = Vec::with_capacity(closes.len());
    let mut num = 0.0;
    let mut den = 0.0;

    for &close in closes {
        num = close + decay * num;
        den = 1.0 + decay * den;
        result.push(num / den);
    }

    result
}
