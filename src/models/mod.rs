//! Typed models for CoinGecko REST responses.
//!
//! Contains the markets list entry and the historical price series
//! decoded from the market chart endpoint.

pub mod history;
pub mod market;

pub use history::{MarketChartResponse, PricePoint, PriceSeries};
pub use market::AssetSummary;
