//! Contact form rendering and hit-testing

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_checkbox, draw_error, draw_field, draw_radio_group};
use crate::app::App;
use crate::state::{FieldId, QueryType};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const SUBMIT_LABEL: &str = "Submit";
const SUBMIT_WIDTH: u16 = 20;

/// Target of a mouse click inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormHit {
    Field(FieldId),
    QueryOption(QueryType),
    Submit,
}

/// Screen areas of every form control, computed from the form area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub block: Rect,
    controls: [Rect; 6],
    errors: [Rect; 6],
    pub query_options: [Rect; 2],
    pub submit: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(3),             // First / last name
                Constraint::Length(1),             // Name errors
                Constraint::Length(3),             // Email
                Constraint::Length(1),             // Email error
                Constraint::Length(3),             // Query type
                Constraint::Length(1),             // Query type error
                Constraint::Min(3),                // Message
                Constraint::Length(1),             // Message error
                Constraint::Length(1),             // Consent
                Constraint::Length(1),             // Consent error
                Constraint::Length(BUTTON_HEIGHT), // Submit
            ])
            .split(inner);

        let halves = |row: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)])
                .split(row)
        };
        let names = halves(rows[0]);
        let name_errors = halves(rows[1]);

        let query_inner = Block::default().borders(Borders::ALL).inner(rows[4]);
        let options = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(1)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(query_inner);

        let submit = Layout::horizontal([Constraint::Length(SUBMIT_WIDTH)])
            .flex(Flex::Center)
            .split(rows[10])[0];

        Self {
            block: area,
            // FieldId::ALL order
            controls: [names[0], names[2], rows[2], rows[4], rows[6], rows[8]],
            errors: [
                name_errors[0],
                name_errors[2],
                rows[3],
                rows[5],
                rows[7],
                rows[9],
            ],
            query_options: [options[0], options[1]],
            submit,
        }
    }

    fn index(field: FieldId) -> usize {
        FieldId::ALL
            .iter()
            .position(|id| *id == field)
            .unwrap_or_default()
    }

    pub fn control(&self, field: FieldId) -> Rect {
        self.controls[Self::index(field)]
    }

    pub fn error(&self, field: FieldId) -> Rect {
        self.errors[Self::index(field)]
    }

    /// Find the control under a terminal cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<FormHit> {
        let pos = Position::new(column, row);

        if self.submit.contains(pos) {
            return Some(FormHit::Submit);
        }
        if let Some(option) = QueryType::ALL
            .into_iter()
            .zip(self.query_options)
            .find_map(|(option, rect)| rect.contains(pos).then_some(option))
        {
            return Some(FormHit::QueryOption(option));
        }
        FieldId::ALL
            .into_iter()
            .find(|id| self.control(*id).contains(pos))
            .map(FormHit::Field)
    }
}

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let layout = FormLayout::new(area);
    let state = app.form.state();
    let view = app.form.view();

    let border_color = if state.is_submit_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, layout.block);

    for field in state.fields() {
        let is_active = state.active_field() == Some(field.id);
        let is_errored = view.is_errored(field.id);
        let area = layout.control(field.id);

        match field.id {
            FieldId::QueryType => draw_radio_group(
                frame,
                area,
                field,
                &layout.query_options,
                is_active,
                is_errored,
            ),
            FieldId::Consent => draw_checkbox(frame, area, field, is_active, is_errored),
            _ => draw_field(frame, area, field, is_active, is_errored),
        }
        draw_error(frame, layout.error(field.id), view, field);
    }

    render_button(frame, layout.submit, SUBMIT_LABEL, state.is_submit_active());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout() -> FormLayout {
        FormLayout::new(Rect::new(0, 1, 100, 38))
    }

    #[test]
    fn test_controls_do_not_overlap() {
        let layout = layout();
        for a in FieldId::ALL {
            for b in FieldId::ALL.into_iter().filter(|b| *b != a) {
                assert!(
                    !layout.control(a).intersects(layout.control(b)),
                    "{a} overlaps {b}"
                );
            }
        }
    }

    #[test]
    fn test_names_share_a_row() {
        let layout = layout();
        let first = layout.control(FieldId::FirstName);
        let last = layout.control(FieldId::LastName);
        assert_eq!(first.y, last.y);
        assert!(first.right() <= last.x);
    }

    #[test]
    fn test_error_line_sits_under_control() {
        let layout = layout();
        for field in FieldId::ALL {
            assert_eq!(layout.error(field).y, layout.control(field).bottom());
        }
    }

    #[test]
    fn test_hit_test_finds_each_control() {
        let layout = layout();
        let email = layout.control(FieldId::Email);
        assert_eq!(
            layout.hit_test(email.x + 1, email.y + 1),
            Some(FormHit::Field(FieldId::Email))
        );

        let consent = layout.control(FieldId::Consent);
        assert_eq!(
            layout.hit_test(consent.x, consent.y),
            Some(FormHit::Field(FieldId::Consent))
        );

        assert_eq!(
            layout.hit_test(layout.submit.x + 1, layout.submit.y + 1),
            Some(FormHit::Submit)
        );
    }

    #[test]
    fn test_hit_test_prefers_radio_option_over_group() {
        let layout = layout();
        let support = layout.query_options[1];
        assert_eq!(
            layout.hit_test(support.x, support.y),
            Some(FormHit::QueryOption(QueryType::SupportRequest))
        );

        let group = layout.control(FieldId::QueryType);
        assert_eq!(
            layout.hit_test(group.x, group.y),
            Some(FormHit::Field(FieldId::QueryType))
        );
    }

    #[test]
    fn test_hit_test_outside_form() {
        let layout = layout();
        assert_eq!(layout.hit_test(0, 0), None);
    }

    #[test]
    fn test_submit_is_centered() {
        let layout = layout();
        assert_eq!(layout.submit.width, SUBMIT_WIDTH);
        let left = layout.submit.x - layout.block.x;
        let right = layout.block.right() - layout.submit.right();
        assert!(left.abs_diff(right) <= 4);
    }
}
