// =============================================================================
// Signals Module
// =============================================================================
//
// Maps the latest fully-defined indicator row to per-indicator BUY/SELL/HOLD
// signals and aggregates them into an overall recommendation.

pub mod classify;

pub use classify::{classify, SignalSet, BUY_VOTE_THRESHOLD};
