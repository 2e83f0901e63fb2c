//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::chart::ChartDataset;
use crate::models::AssetSummary;
use crate::window::{ChartWindow, ListWindow};

/// How long a transient error stays visible in the status bar.
const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Central application state container.
///
/// Owns everything the views render and the request-generation counters
/// that make stale fetch results detectable. Mutated only by
/// [`event::update`](super::event::update).
pub struct App {
    // -- Navigation State --
    /// Active view. Detail carries the asset being charted.
    pub view: View,
    /// Window for the list view's percentage-change column.
    pub list_window: ListWindow,
    /// Window for the detail view's chart range.
    pub chart_window: ChartWindow,
    /// Cursor position in the list view.
    pub selected: usize,

    // -- Market Data --
    /// Last successfully fetched markets list. Replaced wholesale on
    /// every successful fetch and retained across failures.
    pub assets: Vec<AssetSummary>,
    /// Chart dataset for the current detail view, once fetched.
    pub chart: Option<ChartDataset>,

    // -- Fetch State --
    /// Whether a list fetch is in flight.
    pub list_loading: bool,
    /// Whether a chart fetch is in flight.
    pub chart_loading: bool,
    /// Generation counter of the most recently issued list fetch.
    list_request: u64,
    /// Generation counter of the most recently issued chart fetch.
    chart_request: u64,

    // -- UI State --
    /// Error message to display (clears after timeout).
    pub error_message: Option<ErrorDisplay>,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new() -> Self {
        Self {
            view: View::List,
            list_window: ListWindow::default(),
            chart_window: ChartWindow::default(),
            selected: 0,

            assets: Vec::new(),
            chart: None,

            list_loading: false,
            chart_loading: false,
            list_request: 0,
            chart_request: 0,

            error_message: None,
            should_quit: false,
        }
    }

    /// Moves the list cursor down one row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.assets.len() {
            self.selected += 1;
        }
    }

    /// Moves the list cursor up one row.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Returns the asset under the list cursor.
    pub fn selected_asset(&self) -> Option<&AssetSummary> {
        self.assets.get(self.selected)
    }

    /// Switches to the detail view for `asset_id`.
    pub fn enter_detail(&mut self, asset_id: String) {
        self.chart = None;
        self.view = View::Detail { asset_id };
    }

    /// Returns to the list view.
    ///
    /// Bumps the chart generation so an in-flight series fetch for the
    /// abandoned detail view is discarded when it resolves.
    pub fn leave_detail(&mut self) {
        self.chart_request += 1;
        self.chart_loading = false;
        self.chart = None;
        self.view = View::List;
    }

    /// Marks a new list fetch as the current one and returns its
    /// generation tag.
    pub fn begin_list_fetch(&mut self) -> u64 {
        self.list_request += 1;
        self.list_loading = true;
        self.list_request
    }

    /// Marks a new chart fetch as the current one and returns its
    /// generation tag.
    pub fn begin_chart_fetch(&mut self) -> u64 {
        self.chart_request += 1;
        self.chart_loading = true;
        self.chart_request
    }

    /// Whether a list fetch result with this tag is still the latest.
    pub fn is_current_list_fetch(&self, request: u64) -> bool {
        request == self.list_request
    }

    /// Whether a chart fetch result with this tag is still the latest.
    pub fn is_current_chart_fetch(&self, request: u64) -> bool {
        request == self.chart_request
    }

    /// Replaces the markets list, keeping the cursor in bounds.
    pub fn apply_assets(&mut self, assets: Vec<AssetSummary>) {
        self.assets = assets;
        if self.selected >= self.assets.len() {
            self.selected = self.assets.len().saturating_sub(1);
        }
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error messages older than the display duration.
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > ERROR_DISPLAY_DURATION
        {
            self.error_message = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Views of the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Ranked markets list.
    List,
    /// Historical chart for one asset.
    Detail { asset_id: String },
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}
