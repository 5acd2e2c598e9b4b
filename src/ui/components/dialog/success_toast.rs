//! Success notification shown after an accepted submission

use super::base::{render_dialog, DialogConfig};
use chrono::{DateTime, Local};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub const SUCCESS_TITLE: &str = "Message Sent!";
pub const SUCCESS_MESSAGE: &str = "Thanks for completing the form. We'll be in touch soon!";

/// Render the success toast overlay centered on the screen
pub fn render_success_toast(frame: &mut Frame, sent_at: Option<DateTime<Local>>) {
    let message = match sent_at {
        Some(time) => format!("{SUCCESS_MESSAGE}\n\nSent at {}", time.format("%H:%M:%S")),
        None => SUCCESS_MESSAGE.to_string(),
    };

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: SUCCESS_TITLE,
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
