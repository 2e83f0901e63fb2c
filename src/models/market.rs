//! Markets list entry.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::window::ListWindow;

/// One entry of the ranked markets list.
///
/// `id` is the stable CoinGecko slug used to request the asset's price
/// history. The percentage-change fields are all optional: the upstream
/// omits a window variant when it has no data for it.
#[derive(Clone, Debug, Deserialize)]
pub struct AssetSummary {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: Decimal,
    pub market_cap: Option<Decimal>,
    pub price_change_percentage_24h: Option<Decimal>,
    #[serde(rename = "price_change_percentage_1h_in_currency")]
    pub change_1h: Option<Decimal>,
    #[serde(rename = "price_change_percentage_24h_in_currency")]
    pub change_24h: Option<Decimal>,
    #[serde(rename = "price_change_percentage_7d_in_currency")]
    pub change_7d: Option<Decimal>,
    #[serde(rename = "price_change_percentage_30d_in_currency")]
    pub change_30d: Option<Decimal>,
    #[serde(rename = "price_change_percentage_1y_in_currency")]
    pub change_1y: Option<Decimal>,
}

impl AssetSummary {
    /// Returns the percentage change matching the active list window.
    ///
    /// The daily window falls back to the always-present
    /// `price_change_percentage_24h` field when the `in_currency` variant
    /// is missing.
    pub fn change_for(&self, window: ListWindow) -> Option<Decimal> {
        match window {
            ListWindow::Hourly => self.change_1h,
            ListWindow::Daily => self.change_24h.or(self.price_change_percentage_24h),
            ListWindow::Weekly => self.change_7d,
            ListWindow::Monthly => self.change_30d,
            ListWindow::YearToDate => self.change_1y,
        }
    }
}
