//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, View};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (loading, view_label) = match app.view {
        View::List => (app.list_loading, " List ".to_string()),
        View::Detail { ref asset_id } => (app.chart_loading, format!(" {asset_id} ")),
    };

    let fetch_span = if loading {
        Span::styled(" Loading... ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" Ready ", Style::default().fg(Color::Green))
    };

    let error_span = if let Some(ref error) = app.error_message {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(view_label, Style::default().fg(Color::White)),
        Span::raw("│"),
        fetch_span,
        Span::raw("│"),
        error_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
