//! Application state and core logic

use crate::config::FormConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{ContactForm, FieldId, FieldRegistry, FormEvent, QueryType, SubmitEvent};
use crate::ui::{self, FormHit};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::time::Instant;

/// Window in which a second Ctrl+C quits
const CTRL_C_WINDOW: Duration = Duration::from_millis(500);

/// Main application struct
pub struct App {
    /// Contact form controller and its view
    pub form: ContactForm<FieldRegistry>,
    /// Whether the app should quit
    quit: bool,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        let form = ContactForm::new(FieldRegistry::new(), config.notification_duration())
            .with_validate_on_blur(config.validate_on_blur());

        Self {
            form,
            quit: false,
            status_message: None,
            terminal_size: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the loop should poll fast (notification waiting to hide)
    pub fn is_animating(&self) -> bool {
        self.form.notification().is_pending()
    }

    /// Run time-based updates (notification auto-hide)
    pub fn tick(&mut self) {
        self.form.tick(Instant::now());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::Char('s') && key.modifiers.contains(SUBMIT_MODIFIER) {
            self.submit();
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            if self.form.view().is_notification_shown() {
                self.form.dismiss_notification();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            _ => match self.form.state().active_field() {
                None => self.handle_submit_button_key(key),
                Some(FieldId::QueryType) => self.handle_query_type_key(key),
                Some(FieldId::Consent) => self.handle_consent_key(key),
                Some(field) => self.handle_text_key(field, key),
            },
        }

        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(last) if now.duration_since(last) <= CTRL_C_WINDOW => self.quit = true,
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    fn handle_submit_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            KeyCode::Up => self.form.focus_prev(),
            KeyCode::Down => self.form.focus_next(),
            _ => {}
        }
    }

    fn handle_query_type_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::Char(' ') => self.form.cycle_query_type(),
            KeyCode::Char('1') => self.form.select_query_type(QueryType::GeneralEnquiry),
            KeyCode::Char('2') => self.form.select_query_type(QueryType::SupportRequest),
            KeyCode::Up => self.form.focus_prev(),
            KeyCode::Down | KeyCode::Enter => self.form.focus_next(),
            _ => {}
        }
    }

    fn handle_consent_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.form.toggle_consent(),
            KeyCode::Up => self.form.focus_prev(),
            KeyCode::Down => self.form.focus_next(),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, field: FieldId, key: KeyEvent) {
        let is_multiline = field == FieldId::Message;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c)
            }
            KeyCode::Backspace => self.form.backspace(),
            // Enter in the message field adds a newline
            KeyCode::Enter if is_multiline => self.form.input_char('\n'),
            KeyCode::Enter => self.form.focus_next(),
            KeyCode::Up if !is_multiline => self.form.focus_prev(),
            KeyCode::Down if !is_multiline => self.form.focus_next(),
            _ => {}
        }
    }

    /// Submit the form
    fn submit(&mut self) {
        let mut event = SubmitEvent::new();
        self.form.handle_event(FormEvent::Submit(&mut event));
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }

        // Any click dismisses a visible notification
        if self.form.view().is_notification_shown() {
            self.form.dismiss_notification();
            return Ok(());
        }

        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let layout = ui::form_layout(Rect::new(0, 0, width, height));

        match layout.hit_test(mouse.column, mouse.row) {
            Some(FormHit::Submit) => {
                self.form.focus_slot(FieldId::ALL.len());
                self.submit();
            }
            Some(FormHit::QueryOption(option)) => {
                self.focus_field(FieldId::QueryType);
                self.form.select_query_type(option);
            }
            Some(FormHit::Field(FieldId::Consent)) => {
                self.focus_field(FieldId::Consent);
                self.form.toggle_consent();
            }
            Some(FormHit::Field(field)) => self.focus_field(field),
            None => {}
        }

        Ok(())
    }

    fn focus_field(&mut self, field: FieldId) {
        let slot = FieldId::ALL
            .iter()
            .position(|id| *id == field)
            .unwrap_or_default();
        self.form.focus_slot(slot);
    }
}

#[cfg(test)]
impl App {
    /// Fill every field with valid input through the key handler
    pub fn fill_for_test(&mut self) {
        for c in "Ann".chars() {
            self.handle_key(KeyEvent::from(KeyCode::Char(c))).unwrap();
        }
        self.handle_key(KeyEvent::from(KeyCode::Tab)).unwrap();
        for c in "Lee".chars() {
            self.handle_key(KeyEvent::from(KeyCode::Char(c))).unwrap();
        }
        self.handle_key(KeyEvent::from(KeyCode::Tab)).unwrap();
        for c in "ann@lee.com".chars() {
            self.handle_key(KeyEvent::from(KeyCode::Char(c))).unwrap();
        }
        self.handle_key(KeyEvent::from(KeyCode::Tab)).unwrap();
        self.handle_key(KeyEvent::from(KeyCode::Char('1'))).unwrap();
        self.handle_key(KeyEvent::from(KeyCode::Tab)).unwrap();
        for c in "Hi".chars() {
            self.handle_key(KeyEvent::from(KeyCode::Char(c))).unwrap();
        }
        self.handle_key(KeyEvent::from(KeyCode::Tab)).unwrap();
        self.handle_key(KeyEvent::from(KeyCode::Char(' '))).unwrap();
    }
}
