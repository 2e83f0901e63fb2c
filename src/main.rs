use std::sync::Mutex;

use tokio::sync::mpsc;
use tracing::info;

use coinwatch::api::MarketClient;
use coinwatch::config::fetch_config;
use coinwatch::error::CoinwatchError;
use coinwatch::tui::event::{self, Action, Message};
use coinwatch::tui::{App, Tui, render, restore_terminal, setup_terminal, update};

/// Tick interval for UI housekeeping (error expiry).
const TICK_INTERVAL_MS: u64 = 250;

/// Log file used while the TUI owns the terminal.
const LOG_FILE: &str = "coinwatch.log";

#[tokio::main]
async fn main() -> Result<(), CoinwatchError> {
    let config = fetch_config()?;
    if let Some(filter) = &config.log_filter {
        init_logging(filter)?;
    }

    let client = MarketClient::new(&config.coingecko)?;
    let mut terminal = setup_terminal()?;

    let result = run(&mut terminal, client).await;

    restore_terminal(&mut terminal)?;
    result
}

/// Drives the message loop until the user quits.
async fn run(terminal: &mut Tui, client: MarketClient) -> Result<(), CoinwatchError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);

    let mut app = App::new();
    info!("starting up");
    dispatch(&client, &tx, event::refresh_list(&mut app));

    loop {
        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| CoinwatchError::Io(e.to_string()))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        if let Some(action) = update(&mut app, message) {
            dispatch(&client, &tx, action);
        }
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Executes a fetch action on a background task.
///
/// The task reports back through the channel with the generation tag the
/// action carried; the update loop decides whether the result still
/// applies.
fn dispatch(client: &MarketClient, tx: &mpsc::UnboundedSender<Message>, action: Action) {
    let client = client.clone();
    let tx = tx.clone();

    match action {
        Action::FetchList { request, window } => {
            tokio::spawn(async move {
                let result = client.markets(window).await;
                let _ = tx.send(Message::MarketList { request, result });
            });
        }
        Action::FetchChart {
            request,
            asset_id,
            window,
        } => {
            tokio::spawn(async move {
                let result = client.market_chart(&asset_id, window).await;
                let _ = tx.send(Message::MarketChart { request, result });
            });
        }
    }
}

/// Writes tracing output to a file; stdout belongs to the TUI.
fn init_logging(filter: &str) -> Result<(), CoinwatchError> {
    let file = std::fs::File::create(LOG_FILE)
        .map_err(|e| CoinwatchError::Io(format!("failed to create {LOG_FILE}: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
