//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;

pub use form::{FormHit, FormLayout};

use crate::app::App;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    form::draw(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Success toast overlays everything while shown
    if app.form.view().is_notification_shown() {
        components::render_success_toast(frame, app.form.notification().shown_at());
    }
}

/// Layout of the form controls for a terminal of the given size
pub fn form_layout(area: Rect) -> FormLayout {
    let (_, main_area, _) = layout::create_layout(area);
    FormLayout::new(main_area)
}

#[cfg(test)]
mod tests {
    use super::components::{SUCCESS_MESSAGE, SUCCESS_TITLE};
    use super::*;
    use crate::config::FormConfig;
    use crate::state::{FieldId, FormEvent, SubmitEvent};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_every_field_label() {
        let app = App::new(&FormConfig::default());
        let screen = render(&app);
        for field in FieldId::ALL {
            assert!(screen.contains(field.label()), "missing {field}");
        }
        assert!(screen.contains("Submit"));
        assert!(!screen.contains(SUCCESS_TITLE));
    }

    #[test]
    fn test_renders_errors_after_empty_submit() {
        let mut app = App::new(&FormConfig::default());
        app.form
            .handle_event(FormEvent::Submit(&mut SubmitEvent::new()));

        let screen = render(&app);
        assert!(screen.contains("This field is required"));
        assert!(screen.contains("please select a query type"));
        assert!(screen.contains("To submit this form, please consent to being contacted"));
    }

    #[test]
    fn test_renders_toast_after_accepted_submit() {
        let mut app = App::new(&FormConfig::default());
        app.fill_for_test();
        app.form
            .handle_event(FormEvent::Submit(&mut SubmitEvent::new()));

        let screen = render(&app);
        assert!(screen.contains(SUCCESS_TITLE));
        assert!(screen.contains(&SUCCESS_MESSAGE[..20]));
        assert!(!screen.contains("This field is required"));
    }

    #[test]
    fn test_form_layout_matches_draw_area() {
        let layout = form_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.block, Rect::new(0, 1, 100, 38));
    }
}
