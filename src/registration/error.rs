//! Validation and input errors

use super::fields::FieldName;
use std::collections::BTreeMap;
use thiserror::Error;

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

/// Errors from the raw `(fieldName, value)` input surface.
///
/// These describe events that cannot address the form at all; bad values for
/// a known field are always accepted and left for validation to report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("unknown course `{0}`")]
    UnknownCourse(String),
    #[error("checkbox value must be `true` or `false`, got `{0}`")]
    InvalidCheckboxValue(String),
}

/// Field-level validation failures, at most one per field.
///
/// Iterates in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    entries: BTreeMap<FieldName, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier message
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldValidationError> + '_ {
        self.entries
            .iter()
            .map(|(field, message)| FieldValidationError {
                field: *field,
                message: message.clone(),
            })
    }
}

impl FromIterator<FieldValidationError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        for error in iter {
            set.insert(error.field, error.message);
        }
        set
    }
}
