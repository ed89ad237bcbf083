//! UI module for rendering the payment form

mod field;
mod response_panel;
mod toast;

use crate::api::PaymentApi;
use crate::app::App;
use crate::state::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field box height (borders + value) plus its error line
const FIELD_HEIGHT: u16 = 4;

/// Main draw function
pub fn draw<A: PaymentApi>(frame: &mut Frame, app: &App<A>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // Title
            Constraint::Length(FIELD_HEIGHT * 2), // Cardholder details
            Constraint::Length(3),                // Submit button
            Constraint::Min(0),                   // Response panel
            Constraint::Length(1),                // Toast
            Constraint::Length(1),                // Key hints
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_fields(frame, chunks[1], app);
    draw_submit_button(frame, chunks[2], app.session.is_pending());
    response_panel::draw(frame, chunks[3], app.session.outcome());
    toast::draw(frame, chunks[4], app.session.notification());
    draw_hints(frame, chunks[5]);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Submit Payment",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "All fields are required.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_fields<A: PaymentApi>(frame: &mut Frame, area: Rect, app: &App<A>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT); 2])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50); 2])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50); 2])
        .split(rows[1]);

    let slots = [
        (Field::FirstName, top[0]),
        (Field::LastName, top[1]),
        (Field::ZipCode, bottom[0]),
        (Field::CardNumber, bottom[1]),
    ];
    let form = app.session.form();
    let errors = app.session.errors();
    for (f, slot) in slots {
        field::draw_field(
            frame,
            slot,
            f,
            form.get(f),
            errors.get(f),
            app.focused == f,
        );
    }
}

fn draw_submit_button(frame: &mut Frame, area: Rect, is_pending: bool) {
    let (label, style) = if is_pending {
        ("Processing…", Style::default().fg(Color::DarkGray))
    } else {
        (
            "Submit Payment [Enter]",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let block = Block::default().borders(Borders::ALL).border_style(style);
    let text = format!(" {label} ");
    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let hints = "Tab/Shift+Tab: move  Enter: submit  Ctrl+R: reset  Esc: quit";
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPaymentApi;
    use crate::session::{FormEvent, FormSession};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App<MockPaymentApi>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_labels_and_validation_errors() {
        let mut app = App::new(Arc::new(MockPaymentApi::new()), FormSession::default());
        app.session.begin_submit();

        let screen = render(&app);
        assert!(screen.contains("First Name"));
        assert!(screen.contains("Card Number"));
        assert!(screen.contains("Required"));
        assert!(screen.contains("Submit Payment [Enter]"));
    }

    #[test]
    fn test_renders_grouped_card_number() {
        let mut app = App::new(Arc::new(MockPaymentApi::new()), FormSession::default());
        app.dispatch(FormEvent::FieldChanged(
            Field::CardNumber,
            "1234567812345678".to_string(),
        ));

        let screen = render(&app);
        assert!(screen.contains("1234 5678 1234 5678"));
    }
}
