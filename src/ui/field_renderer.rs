//! Field rendering utilities for the contact form

use crate::state::{FieldRegistry, FormField, QueryType};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool, is_errored: bool) -> Style {
    if is_errored {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a text input or textarea
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, is_errored: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { CURSOR } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} * ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, is_errored));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the query type radio group, one option per area in `option_areas`
pub fn draw_radio_group(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    option_areas: &[Rect],
    is_active: bool,
    is_errored: bool,
) {
    let block = Block::default()
        .title(format!(" {} * ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, is_errored));
    frame.render_widget(block, area);

    let selected = field.as_choice();
    for (option, option_area) in QueryType::ALL.iter().zip(option_areas) {
        let is_selected = selected == Some(*option);
        let marker = if is_selected { "(•)" } else { "( )" };
        let style = if is_selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text = Paragraph::new(Line::from(Span::styled(
            format!("{marker} {}", option.label()),
            style,
        )));
        frame.render_widget(text, *option_area);
    }
}

/// Draw the consent checkbox on a single line
pub fn draw_checkbox(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, is_errored: bool) {
    let box_style = if is_errored {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let label_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(field.display_value(), box_style),
        Span::raw(" "),
        Span::styled(field.label.as_str(), label_style),
        Span::styled(" *", Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the error line under a control, empty when the annotation is hidden
pub fn draw_error(frame: &mut Frame, area: Rect, registry: &FieldRegistry, field: &FormField) {
    if let Some(message) = registry.visible_error(field.id) {
        let text = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(text, area);
    }
}
