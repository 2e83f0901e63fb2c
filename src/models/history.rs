//! Historical price series for one asset.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One observation of an asset's price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds. Non-decreasing within a series.
    pub timestamp_ms: i64,
    pub price: Decimal,
}

/// Ordered price observations for one asset over one requested window.
///
/// Produced once per fetch and replaced wholesale on the next one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceSeries {
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Wire shape of the market chart endpoint.
///
/// The upstream returns prices as `[[timestamp, price], ...]` pairs;
/// other fields of the response (market caps, volumes) are ignored.
#[derive(Debug, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(i64, Decimal)>,
}

impl From<MarketChartResponse> for PriceSeries {
    fn from(response: MarketChartResponse) -> Self {
        PriceSeries {
            points: response
                .prices
                .into_iter()
                .map(|(timestamp_ms, price)| PricePoint {
                    timestamp_ms,
                    price,
                })
                .collect(),
        }
    }
}
