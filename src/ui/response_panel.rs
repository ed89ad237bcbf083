//! API response panel

use crate::state::{ResponseBody, SubmissionOutcome};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the last response received, if any
pub fn draw(frame: &mut Frame, area: Rect, outcome: &SubmissionOutcome) {
    let Some(view) = outcome.response() else {
        return;
    };

    let badge_color = if view.ok { Color::Green } else { Color::Red };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("● {}", view.status_label()),
            Style::default()
                .fg(badge_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(summary_lines(&view.body));
    let body = view.body.to_string();
    lines.extend(body.lines().map(|l| Line::from(l.to_string())));

    let block = Block::default()
        .title(" API Response ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// One-line highlights pulled from recognised response shapes
fn summary_lines(body: &ResponseBody) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(error) = body.service_error() {
        let message = error.message.unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("{}: {message}", error.error_code),
            Style::default().fg(Color::Red),
        )));
        if let Some(path) = error.path {
            let status = error.status.map(|s| format!(" ({s})")).unwrap_or_default();
            lines.push(Line::from(format!("at {path}{status}")));
        }
        if let Some(timestamp) = error.timestamp {
            let when = timestamp.format("%Y-%m-%d %H:%M:%S");
            lines.push(Line::from(format!("on {when}")));
        }
    } else if let Some(receipt) = body.receipt() {
        if let Some(id) = receipt.transaction_id {
            lines.push(Line::from(format!("Transaction: {id}")));
        }
        if let Some(status) = receipt.status {
            lines.push(Line::from(format!("Status: {status}")));
        }
        if let Some(message) = receipt.error_message {
            let style = Style::default().fg(Color::Red);
            lines.push(Line::from(Span::styled(message, style)));
        }
    }
    if !lines.is_empty() {
        lines.push(Line::default());
    }
    lines
}
