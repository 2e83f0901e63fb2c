//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::{App, View};
use super::views::{detail, list};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match &app.view {
        View::List => list::render(frame, app),
        View::Detail { asset_id } => detail::render(frame, app, asset_id),
    }
}
