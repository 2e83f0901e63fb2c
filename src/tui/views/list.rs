//! Markets list view layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

use crate::tui::app::App;
use crate::tui::components::status_bar;
use crate::window::ListWindow;

/// Renders the list view.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Window selector
            Constraint::Min(5),    // Markets table
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    render_window_selector(frame, main_layout[1], app);
    render_table(frame, main_layout[2], app);
    render_keybindings(frame, main_layout[3]);
}

/// Renders the time-window selector line.
fn render_window_selector(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::raw(" Window: ")];

    for window in ListWindow::ALL {
        let style = if window == app.list_window {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", window.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the ranked markets table.
fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Crypto Prices ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    // Column headers
    lines.push(Line::from(Span::styled(
        format!(
            " {:>2}  {:<24} {:>14} {:>10}",
            "#", "Coin", "Price", "Change"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if app.assets.is_empty() {
        let placeholder = if app.list_loading {
            "Loading..."
        } else {
            "No data"
        };
        lines.push(Line::from(Span::styled(
            format!(" {placeholder}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let max_rows = inner.height.saturating_sub(1) as usize;
    for (index, asset) in app.assets.iter().take(max_rows).enumerate() {
        let row_style = if index == app.selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let change_span = match asset.change_for(app.list_window) {
            Some(change) => {
                let color = if change >= Decimal::ZERO {
                    Color::Green
                } else {
                    Color::Red
                };
                Span::styled(format!("{:>+9.2}%", change), Style::default().fg(color))
            }
            // Upstream omitted this window's change; show an explicit
            // placeholder instead of an empty cell.
            None => Span::styled(
                format!("{:>10}", "--"),
                Style::default().fg(Color::DarkGray),
            ),
        };

        lines.push(
            Line::from(vec![
                Span::raw(format!(" {:>2}  ", index + 1)),
                Span::raw(format!(
                    "{:<24} ",
                    format!("{} ({})", asset.name, asset.symbol.to_uppercase())
                )),
                Span::raw(format!("${:>13.2} ", asset.current_price)),
                change_span,
            ])
            .style(row_style),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[j/k]move [Enter]chart [h/l]window [r]refresh [q]quit";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
