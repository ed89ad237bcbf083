//! Toast line for transient notifications

use crate::state::{Notification, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
    let Some(notification) = notification else {
        return;
    };

    let style = match notification.severity {
        Severity::Ok => Style::default().fg(Color::Black).bg(Color::Green),
        Severity::Error => Style::default().fg(Color::White).bg(Color::Red),
    };
    frame.render_widget(
        Paragraph::new(format!(" {} ", notification.message)).style(style),
        area,
    );
}
