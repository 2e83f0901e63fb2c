//! Chart dataset construction.
//!
//! Turns a raw price series into the label/price columns the detail view
//! renders. Pure and deterministic: the same series, window, and asset id
//! always produce the same dataset.

use chrono::DateTime;
use rust_decimal::Decimal;

use crate::models::PriceSeries;
use crate::window::ChartWindow;

/// Rendering-ready chart data.
///
/// `labels` and `prices` are always the same length and index-aligned
/// with the source series. Labels are display-only; duplicates are
/// permitted and never used as keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartDataset {
    /// Self-describing title, e.g. `"bitcoin 7d"`.
    pub title: String,
    pub labels: Vec<String>,
    pub prices: Vec<Decimal>,
}

impl ChartDataset {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Returns the lowest and highest price, or `None` for an empty
    /// dataset.
    pub fn price_range(&self) -> Option<(Decimal, Decimal)> {
        let min = self.prices.iter().min()?;
        let max = self.prices.iter().max()?;
        Some((*min, *max))
    }
}

/// Builds a chart dataset from a price series.
///
/// An empty series yields empty label/price columns; that is a valid,
/// renderable state, not an error.
pub fn build(series: &PriceSeries, window: ChartWindow, asset_id: &str) -> ChartDataset {
    let labels = series
        .points
        .iter()
        .map(|point| format_label(point.timestamp_ms, window))
        .collect();
    let prices = series.points.iter().map(|point| point.price).collect();

    ChartDataset {
        title: format!("{} {}", asset_id, window.label()),
        labels,
        prices,
    }
}

/// Formats a Unix-millisecond timestamp as a display label.
///
/// The 1-day window spans hours, so it shows time of day; every longer
/// window shows month and day. Timestamps the upstream sends outside the
/// representable range fall back to the raw value.
fn format_label(timestamp_ms: i64, window: ChartWindow) -> String {
    let Some(datetime) = DateTime::from_timestamp_millis(timestamp_ms) else {
        return timestamp_ms.to_string();
    };

    match window {
        ChartWindow::Day => datetime.format("%H:%M").to_string(),
        _ => datetime.format("%b %d").to_string(),
    }
}
