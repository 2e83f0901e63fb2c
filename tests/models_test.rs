//! Deserialization tests for the CoinGecko response models.

use rust_decimal_macros::dec;

use coinwatch::api::{parse_market_chart, parse_markets};
use coinwatch::models::AssetSummary;
use coinwatch::window::ListWindow;

const MARKETS_JSON: &str = include_str!("fixtures/markets.json");
const MARKET_CHART_JSON: &str = include_str!("fixtures/market_chart.json");

#[test]
fn markets_response_deserializes() {
    let assets = parse_markets(MARKETS_JSON).expect("Failed to deserialize markets response");

    assert_eq!(assets.len(), 2);

    let bitcoin: &AssetSummary = &assets[0];
    assert_eq!(bitcoin.id, "bitcoin");
    assert_eq!(bitcoin.symbol, "btc");
    assert_eq!(bitcoin.name, "Bitcoin");
    assert!(bitcoin.image.ends_with("bitcoin.png"));
    assert_eq!(bitcoin.current_price, dec!(67342.12));
    assert_eq!(bitcoin.market_cap, Some(dec!(1329774089211)));
    assert_eq!(bitcoin.price_change_percentage_24h, Some(dec!(1.84)));
    assert_eq!(bitcoin.change_7d, Some(dec!(-2.31)));
}

#[test]
fn markets_order_is_preserved() {
    let assets = parse_markets(MARKETS_JSON).unwrap();

    assert_eq!(assets[0].id, "bitcoin");
    assert_eq!(assets[1].id, "staked-ether");
}

#[test]
fn change_for_selects_the_window_variant() {
    let assets = parse_markets(MARKETS_JSON).unwrap();
    let bitcoin = &assets[0];

    assert_eq!(bitcoin.change_for(ListWindow::Weekly), Some(dec!(-2.31)));
    // No in_currency variant for the daily window; falls back to the
    // always-present 24h field.
    assert_eq!(bitcoin.change_for(ListWindow::Daily), Some(dec!(1.84)));
    // The hourly variant was not requested, so it is simply absent.
    assert_eq!(bitcoin.change_for(ListWindow::Hourly), None);
}

#[test]
fn absent_change_fields_deserialize_as_none() {
    let assets = parse_markets(MARKETS_JSON).unwrap();
    let steth = &assets[1];

    assert_eq!(steth.market_cap, None);
    assert_eq!(steth.price_change_percentage_24h, None);
    for window in ListWindow::ALL {
        assert_eq!(steth.change_for(window), None);
    }
}

#[test]
fn market_chart_response_deserializes() {
    let series =
        parse_market_chart(MARKET_CHART_JSON).expect("Failed to deserialize chart response");

    assert_eq!(series.len(), 3);
    assert_eq!(series.points[0].timestamp_ms, 1700000000000);
    assert_eq!(series.points[0].price, dec!(36416.22));
    assert_eq!(series.points[2].timestamp_ms, 1700007200000);
    assert_eq!(series.points[2].price, dec!(36488.05));

    // Timestamps are non-decreasing within one series.
    assert!(
        series
            .points
            .windows(2)
            .all(|pair| pair[0].timestamp_ms <= pair[1].timestamp_ms)
    );
}
