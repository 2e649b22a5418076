pub mod client;

pub use client::AlphaVantageClient;
