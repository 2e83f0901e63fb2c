//! Navigation and stale-response suppression tests.
//!
//! Drives the update loop directly with synthetic key events and tagged
//! fetch results; no network or terminal involved.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use coinwatch::api::parse_markets;
use coinwatch::models::{AssetSummary, PricePoint, PriceSeries};
use coinwatch::tui::event::refresh_list;
use coinwatch::tui::{Action, App, Event, Message, View, update};
use coinwatch::window::{ChartWindow, ListWindow};

fn key(code: KeyCode) -> Message {
    Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn asset(id: &str) -> AssetSummary {
    AssetSummary {
        id: id.to_string(),
        symbol: id[..3.min(id.len())].to_string(),
        name: id.to_string(),
        image: format!("https://example.com/{id}.png"),
        current_price: dec!(100),
        market_cap: Some(dec!(1000000)),
        price_change_percentage_24h: Some(dec!(1.5)),
        change_1h: None,
        change_24h: None,
        change_7d: None,
        change_30d: None,
        change_1y: None,
    }
}

fn series(points: &[(i64, &str)]) -> PriceSeries {
    PriceSeries {
        points: points
            .iter()
            .map(|&(timestamp_ms, price)| PricePoint {
                timestamp_ms,
                price: price.parse().unwrap(),
            })
            .collect(),
    }
}

fn parse_error() -> coinwatch::CoinwatchError {
    parse_markets("not json").unwrap_err()
}

#[test]
fn slow_earlier_list_response_cannot_overwrite_newer_one() {
    let mut app = App::new();

    // Fetch A, then fetch B before A resolves.
    let Action::FetchList {
        request: request_a, ..
    } = refresh_list(&mut app)
    else {
        panic!("expected list fetch");
    };
    let Action::FetchList {
        request: request_b, ..
    } = refresh_list(&mut app)
    else {
        panic!("expected list fetch");
    };

    // B resolves first and is applied.
    assert!(
        update(
            &mut app,
            Message::MarketList {
                request: request_b,
                result: Ok(vec![asset("ethereum")]),
            },
        )
        .is_none()
    );
    // A resolves late and must be discarded.
    update(
        &mut app,
        Message::MarketList {
            request: request_a,
            result: Ok(vec![asset("bitcoin")]),
        },
    );

    assert_eq!(app.assets.len(), 1);
    assert_eq!(app.assets[0].id, "ethereum");
    assert!(!app.list_loading);
}

#[test]
fn back_navigation_discards_late_series_result() {
    let mut app = App::new();
    app.apply_assets(vec![asset("bitcoin")]);

    // Enter the detail view; a chart fetch is issued.
    let Some(Action::FetchChart { request, .. }) = update(&mut app, key(KeyCode::Enter)) else {
        panic!("expected chart fetch on selection");
    };
    assert_eq!(
        app.view,
        View::Detail {
            asset_id: "bitcoin".to_string()
        }
    );

    // Navigate back before the fetch resolves.
    assert!(update(&mut app, key(KeyCode::Esc)).is_none());
    assert_eq!(app.view, View::List);

    // The late-arriving series must not mutate state.
    update(
        &mut app,
        Message::MarketChart {
            request,
            result: Ok(series(&[(1700000000000, "100")])),
        },
    );

    assert_eq!(app.view, View::List);
    assert!(app.chart.is_none());
    assert!(!app.chart_loading);
}

#[test]
fn failed_refresh_retains_previous_list() {
    let mut app = App::new();

    let Action::FetchList { request, .. } = refresh_list(&mut app) else {
        panic!("expected list fetch");
    };
    update(
        &mut app,
        Message::MarketList {
            request,
            result: Ok(vec![asset("bitcoin"), asset("ethereum")]),
        },
    );
    assert_eq!(app.assets.len(), 2);

    // Next refresh fails; the rendered list stays unchanged.
    let Action::FetchList { request, .. } = refresh_list(&mut app) else {
        panic!("expected list fetch");
    };
    update(
        &mut app,
        Message::MarketList {
            request,
            result: Err(parse_error()),
        },
    );

    assert_eq!(app.assets.len(), 2);
    assert_eq!(app.assets[0].id, "bitcoin");
    assert!(!app.list_loading);
    assert!(app.error_message.is_some());
}

#[test]
fn window_change_issues_exactly_one_fetch() {
    let mut app = App::new();
    assert_eq!(app.list_window, ListWindow::Daily);

    let action = update(&mut app, key(KeyCode::Right));
    let Some(Action::FetchList { request, window }) = action else {
        panic!("expected a list fetch on window change");
    };
    assert_eq!(window, ListWindow::Weekly);

    // Cursor movement does not fetch.
    assert!(update(&mut app, key(KeyCode::Down)).is_none());

    // The next window change supersedes the previous request.
    let Some(Action::FetchList {
        request: next_request,
        ..
    }) = update(&mut app, key(KeyCode::Left))
    else {
        panic!("expected a list fetch on window change");
    };
    assert!(next_request > request);
}

#[test]
fn chart_result_builds_dataset_for_current_view() {
    let mut app = App::new();
    app.apply_assets(vec![asset("bitcoin")]);

    let Some(Action::FetchChart {
        request,
        asset_id,
        window,
    }) = update(&mut app, key(KeyCode::Enter))
    else {
        panic!("expected chart fetch on selection");
    };
    assert_eq!(asset_id, "bitcoin");
    assert_eq!(window, ChartWindow::Week);

    update(
        &mut app,
        Message::MarketChart {
            request,
            result: Ok(series(&[(1700000000000, "100"), (1700086400000, "105")])),
        },
    );

    let dataset = app.chart.as_ref().expect("dataset should be built");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.labels.len(), dataset.prices.len());
    assert!(dataset.title.contains("bitcoin"));
    assert!(!app.chart_loading);
}

#[test]
fn repeated_range_key_does_not_refetch() {
    let mut app = App::new();
    app.apply_assets(vec![asset("bitcoin")]);
    update(&mut app, key(KeyCode::Enter));

    // '3' selects the 30-day range and fetches once.
    let Some(Action::FetchChart { window, .. }) = update(&mut app, key(KeyCode::Char('3'))) else {
        panic!("expected chart fetch on range change");
    };
    assert_eq!(window, ChartWindow::Month);

    // Pressing the active range again is a no-op.
    assert!(update(&mut app, key(KeyCode::Char('3'))).is_none());
}

#[test]
fn range_change_supersedes_inflight_chart_fetch() {
    let mut app = App::new();
    app.apply_assets(vec![asset("bitcoin")]);

    let Some(Action::FetchChart {
        request: stale_request,
        ..
    }) = update(&mut app, key(KeyCode::Enter))
    else {
        panic!("expected chart fetch on selection");
    };

    // Change the range before the first fetch resolves.
    let Some(Action::FetchChart {
        request: fresh_request,
        ..
    }) = update(&mut app, key(KeyCode::Char('5')))
    else {
        panic!("expected chart fetch on range change");
    };

    // The superseded result is discarded on arrival.
    update(
        &mut app,
        Message::MarketChart {
            request: stale_request,
            result: Ok(series(&[(1700000000000, "100")])),
        },
    );
    assert!(app.chart.is_none());

    // The current one is applied.
    update(
        &mut app,
        Message::MarketChart {
            request: fresh_request,
            result: Ok(series(&[(1700000000000, "200")])),
        },
    );
    let dataset = app.chart.as_ref().expect("dataset should be built");
    assert_eq!(dataset.prices, vec![dec!(200)]);
}

#[test]
fn quit_key_works_in_both_views() {
    let mut app = App::new();
    update(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit);

    let mut app = App::new();
    app.apply_assets(vec![asset("bitcoin")]);
    update(&mut app, key(KeyCode::Enter));
    update(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
