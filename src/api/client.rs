//! HTTP client for the two market data endpoints.
//!
//! Each fetch performs exactly one outbound request with no retry and no
//! caching; the caller decides when to re-fetch. Response bodies are read
//! as text and decoded separately so transport failures surface as
//! [`CoinwatchError::Unavailable`] and contract violations as
//! [`CoinwatchError::Parse`].

use std::time::Duration;

use tracing::{debug, info};

use crate::config::CoingeckoConfig;
use crate::error::CoinwatchError;
use crate::models::{AssetSummary, MarketChartResponse, PriceSeries};
use crate::window::{ChartWindow, ListWindow};
use crate::Result;

/// Header carrying the optional demo API key.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Per-request timeout. The transport default is unbounded, which would
/// leave the UI spinner stuck on a hung connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of assets per markets page. One page only.
const PAGE_SIZE: u32 = 10;

/// Client for the CoinGecko markets and market chart endpoints.
///
/// Cheap to clone; each fetch task takes its own copy.
#[derive(Clone, Debug)]
pub struct MarketClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl MarketClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoinwatchError::Unavailable`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &CoingeckoConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(MarketClient {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetches the ranked markets list for the given window.
    ///
    /// Returns the top assets by market capitalization in upstream order,
    /// with the percentage-change variant matching `window` populated.
    ///
    /// # Errors
    ///
    /// [`CoinwatchError::Unavailable`] on transport failure or non-success
    /// status; [`CoinwatchError::Parse`] on an unexpected response shape.
    pub async fn markets(&self, window: ListWindow) -> Result<Vec<AssetSummary>> {
        let url = format!("{}/coins/markets", self.api_url);
        let page_size = PAGE_SIZE.to_string();

        debug!(window = window.query_param(), "fetching markets list");
        let request = self.http.get(&url).query(&[
            ("vs_currency", "usd"),
            ("order", "market_cap_desc"),
            ("per_page", page_size.as_str()),
            ("page", "1"),
            ("sparkline", "false"),
            ("price_change_percentage", window.query_param()),
        ]);
        let body = self
            .authorize(request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let assets = parse_markets(&body)?;
        info!(count = assets.len(), "markets list fetched");
        Ok(assets)
    }

    /// Fetches the historical price series for one asset over `window`.
    ///
    /// # Errors
    ///
    /// [`CoinwatchError::InvalidAssetId`] before any network traffic if
    /// `asset_id` is empty or not in slug format; otherwise the same
    /// taxonomy as [`markets`](Self::markets).
    pub async fn market_chart(&self, asset_id: &str, window: ChartWindow) -> Result<PriceSeries> {
        validate_asset_id(asset_id)?;

        let url = format!("{}/coins/{}/market_chart", self.api_url, asset_id);
        let days = window.days().to_string();

        debug!(asset_id, days = window.days(), "fetching market chart");
        let request = self
            .http
            .get(&url)
            .query(&[("vs_currency", "usd"), ("days", days.as_str())]);
        let body = self
            .authorize(request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let series = parse_market_chart(&body)?;
        info!(asset_id, points = series.len(), "market chart fetched");
        Ok(series)
    }

    /// Attaches the demo API key header when one is configured.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }
}

/// Checks that an asset identifier is safe to interpolate into a request
/// path. CoinGecko slugs are lowercase ASCII alphanumerics and hyphens.
///
/// # Errors
///
/// Returns [`CoinwatchError::InvalidAssetId`] for anything else.
pub fn validate_asset_id(asset_id: &str) -> Result<()> {
    let valid = !asset_id.is_empty()
        && asset_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(CoinwatchError::InvalidAssetId(asset_id.to_string()))
    }
}

/// Decodes a markets list response body.
///
/// # Errors
///
/// Returns [`CoinwatchError::Parse`] if the body is not an array of
/// market entries.
pub fn parse_markets(body: &str) -> Result<Vec<AssetSummary>> {
    Ok(serde_json::from_str(body)?)
}

/// Decodes a market chart response body into a price series.
///
/// # Errors
///
/// Returns [`CoinwatchError::Parse`] if the body lacks the `prices`
/// pair array.
pub fn parse_market_chart(body: &str) -> Result<PriceSeries> {
    let response: MarketChartResponse = serde_json::from_str(body)?;
    Ok(response.into())
}
