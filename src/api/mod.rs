//! CoinGecko REST client.

mod client;

pub use client::{MarketClient, parse_market_chart, parse_markets, validate_asset_id};
