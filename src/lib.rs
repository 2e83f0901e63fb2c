//! Terminal viewer for live and historical cryptocurrency market data.
//!
//! Fetches a ranked market snapshot and per-asset price history from the
//! CoinGecko public API and renders them as a list view and an ASCII
//! chart view in a Ratatui TUI.

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod tui;
pub mod window;

pub use error::{CoinwatchError, Result};
