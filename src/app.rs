//! Application state and key handling

use crate::config::AppConfig;
use crate::notify::{self, NoticeQueue};
use crate::registration::{Course, FieldName, FieldUpdate, FormStore, SubmitOutcome};
use crate::state::{Form, FormButton, FormCursor, FormSlot, SLOTS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Form values and errors
    pub store: FormStore,
    /// Focus position within the form
    pub cursor: FormCursor,
    /// Pending success/failure dialogs
    pub notices: NoticeQueue,
    /// Short feedback shown in the status bar
    pub status_message: Option<String>,
    pub config: AppConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: AppConfig) -> Self {
        let mut store = FormStore::new();
        let mut status_message = None;
        for (name, value) in config.prefill() {
            if let Err(err) = store.update_field_raw(name, value) {
                tracing::warn!("Skipping prefill entry `{name}`: {err}");
                status_message = Some(format!("Config: {err}"));
            }
        }

        Self {
            store,
            cursor: FormCursor::new(),
            notices: NoticeQueue::new(config.compact_snapshot()),
            status_message,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            tracing::info!("quit requested");
            self.quit = true;
            return;
        }

        // Notice dialogs are modal
        if self.notices.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notices.dismiss();
            }
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        // Keyboard shortcuts (work from anywhere)
        if Self::is_shortcut(&key, 's') {
            self.submit();
            return;
        }
        if Self::is_shortcut(&key, 'r') {
            self.reset();
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.cursor.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.cursor.prev_field(),
            _ => match self.cursor.active_slot() {
                FormSlot::Text(field) => self.handle_text_key(field, key),
                FormSlot::Checkbox(option) => {
                    if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                        let checked = self.store.fields().gender.get(option);
                        self.store.update_field(FieldUpdate::Gender(option, !checked));
                    }
                }
                FormSlot::CourseSelect => self.handle_course_key(key),
                FormSlot::Actions => self.handle_actions_key(key),
            },
        }
    }

    fn is_shortcut(key: &KeyEvent, c: char) -> bool {
        key.code == KeyCode::Char(c)
            && key
                .modifiers
                .intersects(KeyModifiers::CONTROL | crate::platform::SHORTCUT_MODIFIER)
    }

    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) {
        let Some(current) = self.store.fields().text(field) else {
            return;
        };
        let mut value = current.to_string();

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                value.push(c);
            }
            KeyCode::Backspace => {
                if value.pop().is_none() {
                    return;
                }
            }
            KeyCode::Enter => {
                self.cursor.next_field();
                return;
            }
            _ => return,
        }

        if let Some(update) = FieldUpdate::text(field, value) {
            self.store.update_field(update);
        }
    }

    fn handle_course_key(&mut self, key: KeyEvent) {
        let current = self.store.fields().course;
        let selection = match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => Course::next(current),
            KeyCode::Left | KeyCode::Char('h') => Course::prev(current),
            KeyCode::Backspace | KeyCode::Delete => None,
            KeyCode::Enter => {
                self.cursor.next_field();
                return;
            }
            _ => return,
        };
        self.store.update_field(FieldUpdate::Course(selection));
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.cursor.selected_button.toggle();
            }
            KeyCode::Enter => match self.cursor.selected_button {
                FormButton::Register => self.submit(),
                FormButton::Cancel => self.reset(),
            },
            _ => {}
        }
    }

    /// Validate and notify. On failure focus jumps to the first invalid field.
    pub fn submit(&mut self) {
        let outcome = self.store.submit();
        notify::dispatch(&mut self.notices, &outcome);

        match &outcome {
            SubmitOutcome::Accepted(_) => {
                self.status_message = Some("Registration submitted".to_string());
            }
            SubmitOutcome::Rejected(errors) => {
                let first_invalid = SLOTS
                    .iter()
                    .position(|slot| slot.field().is_some_and(|field| errors.contains(field)));
                if let Some(index) = first_invalid {
                    self.cursor.set_active_field(index);
                }
            }
        }
    }

    /// Clear the form back to its initial state
    pub fn reset(&mut self) {
        self.store.reset();
        self.cursor.reset();
        self.status_message = Some("Form cleared".to_string());
    }
}
