pub mod series;

// Re-export the core data types for convenient access
// (e.g. `use crate::market_data::PriceSeries`).
pub use series::{PriceBar, PriceSeries, SeriesFetcher};
