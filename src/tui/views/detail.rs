//! Asset detail view: historical price chart.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::chart::ChartDataset;
use crate::tui::app::App;
use crate::tui::components::status_bar;
use crate::window::ChartWindow;

/// Width reserved for the price axis, including the separator.
const AXIS_WIDTH: u16 = 12;

/// Renders the detail view.
pub fn render(frame: &mut Frame, app: &App, asset_id: &str) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Window selector
            Constraint::Min(8),    // Chart
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    render_window_selector(frame, main_layout[1], app);
    render_chart(frame, main_layout[2], app, asset_id);
    render_keybindings(frame, main_layout[3]);
}

/// Renders the day-count selector line.
fn render_window_selector(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::raw(" Range: ")];

    for window in ChartWindow::ALL {
        let style = if window == app.chart_window {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", window.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the chart panel.
fn render_chart(frame: &mut Frame, area: Rect, app: &App, asset_id: &str) {
    let title = match &app.chart {
        Some(dataset) => format!(" {} ", dataset.title),
        None => format!(" {} {} ", asset_id, app.chart_window.label()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(dataset) = &app.chart else {
        let placeholder = if app.chart_loading {
            "Loading..."
        } else {
            "No data"
        };
        let para = Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    };

    if dataset.is_empty() {
        // Empty data is a valid state, rendered as a placeholder.
        let para = Paragraph::new("No data").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    }

    frame.render_widget(Paragraph::new(plot_lines(dataset, inner)), inner);
}

/// Builds the plot as text lines: a price axis, one marker per column,
/// and a label line underneath.
fn plot_lines<'a>(dataset: &ChartDataset, area: Rect) -> Vec<Line<'a>> {
    let rows = area.height.saturating_sub(1) as usize;
    let cols = area.width.saturating_sub(AXIS_WIDTH) as usize;
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let (min_price, max_price) = dataset
        .price_range()
        .unwrap_or((Decimal::ZERO, Decimal::ZERO));
    let price_range = max_price - min_price;

    // One sampled series index per column.
    let samples: Vec<usize> = (0..cols)
        .map(|col| {
            if cols == 1 || dataset.len() == 1 {
                0
            } else {
                col * (dataset.len() - 1) / (cols - 1)
            }
        })
        .collect();

    // Row each sampled price lands in; row 0 is the highest band.
    let marker_rows: Vec<usize> = samples
        .iter()
        .map(|&index| {
            if price_range == Decimal::ZERO {
                return rows / 2;
            }
            let relative = (max_price - dataset.prices[index]) / price_range;
            (relative * Decimal::from(rows - 1))
                .round()
                .to_usize()
                .unwrap_or(0)
                .min(rows - 1)
        })
        .collect();

    let mut lines: Vec<Line> = Vec::with_capacity(rows + 1);
    for row in 0..rows {
        let axis_price = if price_range == Decimal::ZERO {
            max_price
        } else {
            max_price - price_range * Decimal::from(row) / Decimal::from(rows.max(2) - 1)
        };

        let mut spans: Vec<Span> = vec![Span::styled(
            format!("{:>10.2} │", axis_price),
            Style::default().fg(Color::DarkGray),
        )];
        let row_chars: String = marker_rows
            .iter()
            .map(|&marker| if marker == row { '●' } else { ' ' })
            .collect();
        spans.push(Span::styled(row_chars, Style::default().fg(Color::Cyan)));
        lines.push(Line::from(spans));
    }

    lines.push(label_line(dataset, &samples, cols));
    lines
}

/// Builds the time-axis line showing the first and last sampled labels.
fn label_line<'a>(dataset: &ChartDataset, samples: &[usize], cols: usize) -> Line<'a> {
    let first = samples
        .first()
        .and_then(|&i| dataset.labels.get(i))
        .cloned()
        .unwrap_or_default();
    let last = samples
        .last()
        .and_then(|&i| dataset.labels.get(i))
        .cloned()
        .unwrap_or_default();

    let gap = cols
        .saturating_sub(first.chars().count() + last.chars().count())
        .max(1);

    Line::from(vec![
        Span::raw(" ".repeat(AXIS_WIDTH as usize)),
        Span::styled(
            format!("{}{}{}", first, " ".repeat(gap), last),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[1-5]range [h/l]cycle [r]refresh [Esc/b]back [q]quit";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
