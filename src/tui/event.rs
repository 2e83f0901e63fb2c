//! Event handling and navigation coordination for the TUI.
//!
//! [`update`] is the single state-transition function: it applies one
//! [`Message`] to the [`App`] and may return one [`Action`] for the
//! driver loop to execute. Fetch results carry the generation tag they
//! were issued with; a result whose tag no longer matches the latest
//! issued tag is discarded without touching visible state.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::chart;
use crate::error::CoinwatchError;
use crate::models::{AssetSummary, PriceSeries};
use crate::window::{ChartWindow, ListWindow};

use super::app::{App, View};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// Result of a markets list fetch, tagged with its generation.
    MarketList {
        request: u64,
        result: Result<Vec<AssetSummary>, CoinwatchError>,
    },
    /// Result of a market chart fetch, tagged with its generation.
    MarketChart {
        request: u64,
        result: Result<PriceSeries, CoinwatchError>,
    },
}

/// Fetches the driver loop must execute.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Fetch the markets list for the given window.
    FetchList { request: u64, window: ListWindow },
    /// Fetch the price history for one asset.
    FetchChart {
        request: u64,
        asset_id: String,
        window: ChartWindow,
    },
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Issues a list fetch for the current window.
///
/// Used for the initial load and every list window change; each call
/// supersedes any fetch still in flight.
pub fn refresh_list(app: &mut App) -> Action {
    let request = app.begin_list_fetch();
    Action::FetchList {
        request,
        window: app.list_window,
    }
}

/// Issues a chart fetch for the current asset and window.
///
/// Returns `None` outside the detail view.
pub fn refresh_chart(app: &mut App) -> Option<Action> {
    let View::Detail { asset_id } = &app.view else {
        return None;
    };
    let asset_id = asset_id.clone();
    let request = app.begin_chart_fetch();
    Some(Action::FetchChart {
        request,
        asset_id,
        window: app.chart_window,
    })
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::MarketList { request, result } => {
            if !app.is_current_list_fetch(request) {
                debug!(request, "discarding stale markets result");
                return None;
            }
            app.list_loading = false;
            match result {
                Ok(assets) => app.apply_assets(assets),
                Err(error) => {
                    // Previous list stays rendered; no automatic retry.
                    warn!(%error, "markets fetch failed");
                    app.show_error(error.to_string());
                }
            }
            None
        }
        Message::MarketChart { request, result } => {
            if !app.is_current_chart_fetch(request) {
                debug!(request, "discarding stale chart result");
                return None;
            }
            app.chart_loading = false;
            match result {
                Ok(series) => {
                    if let View::Detail { asset_id } = &app.view {
                        app.chart = Some(chart::build(&series, app.chart_window, asset_id));
                    }
                }
                Err(error) => {
                    warn!(%error, "chart fetch failed");
                    app.show_error(error.to_string());
                }
            }
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.clear_stale_errors();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return None;
    }

    match app.view {
        View::List => handle_list_keys(app, key),
        View::Detail { .. } => handle_detail_keys(app, key),
    }
}

/// Handles keys for the list view.
fn handle_list_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            None
        }

        // Window selection; each change triggers exactly one re-fetch
        KeyCode::Char('l') | KeyCode::Right => {
            app.list_window = app.list_window.next();
            Some(refresh_list(app))
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.list_window = app.list_window.previous();
            Some(refresh_list(app))
        }

        // Manual refresh of the current window
        KeyCode::Char('r') => Some(refresh_list(app)),

        // Open detail view for the asset under the cursor
        KeyCode::Enter => {
            let asset_id = app.selected_asset()?.id.clone();
            app.enter_detail(asset_id);
            refresh_chart(app)
        }

        _ => None,
    }
}

/// Handles keys for the detail view.
fn handle_detail_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        // Back to the list; a late-arriving series result is discarded
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.leave_detail();
            None
        }

        // Window cycling
        KeyCode::Char('l') | KeyCode::Right => {
            app.chart_window = app.chart_window.next();
            refresh_chart(app)
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.chart_window = app.chart_window.previous();
            refresh_chart(app)
        }

        // Direct window selection; no-op when already active
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            let window = ChartWindow::ALL[index];
            if window == app.chart_window {
                return None;
            }
            app.chart_window = window;
            refresh_chart(app)
        }

        // Manual refresh of the current window
        KeyCode::Char('r') => refresh_chart(app),

        _ => None,
    }
}
