//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, form and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " Contact Us ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Fields marked * are required",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_slot_hints(app.form.state().active_field());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if app.form.submissions() > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("✓ {} sent", app.form.submissions()),
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused slot (None = submit button)
fn get_slot_hints(active: Option<FieldId>) -> String {
    match active {
        Some(FieldId::QueryType) => {
            format!("Tab:next  ←/→ or 1/2:select  {SUBMIT_SHORTCUT}:submit")
        }
        Some(FieldId::Consent) => format!("Tab:next  Space:toggle  {SUBMIT_SHORTCUT}:submit"),
        Some(FieldId::Message) => format!("Tab:next  Enter:newline  {SUBMIT_SHORTCUT}:submit"),
        Some(_) => format!("Tab:next  Shift+Tab:prev  {SUBMIT_SHORTCUT}:submit"),
        None => "Enter:submit  Tab:next".to_string(),
    }
}
