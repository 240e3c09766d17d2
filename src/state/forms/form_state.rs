//! Focus state for the registration form

use super::field::{FormSlot, SLOTS};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the actions row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Register,
    Cancel,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Register => Self::Cancel,
            Self::Cancel => Self::Register,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Cancel => "Cancel",
        }
    }
}

/// Which slot has focus and which button is highlighted
#[derive(Debug, Clone, Default)]
pub struct FormCursor {
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl FormCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_slot(&self) -> FormSlot {
        SLOTS[self.active_field_index]
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_slot() == FormSlot::Actions
    }

    pub fn is_active(&self, slot: FormSlot) -> bool {
        self.active_slot() == slot
    }

    /// Back to the first field with Register highlighted
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Form for FormCursor {
    fn field_count(&self) -> usize {
        SLOTS.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SLOTS.len() - 1);
    }
}
