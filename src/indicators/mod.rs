// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators the scanner
// classifies on.  Warm-up rows (insufficient history) are `None`; callers
// are forced to handle them.

pub mod ema;
pub mod frame;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use frame::{FrameRow, IndicatorFrame};
