//! Focusable slots of the registration form

use crate::registration::{FieldName, FormFields, GenderOption};

/// What sits at one focus position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    /// Free text input bound to a text field
    Text(FieldName),
    /// One of the two gender checkboxes
    Checkbox(GenderOption),
    /// Course selector
    CourseSelect,
    /// Register / Cancel buttons
    Actions,
}

/// Focus order, top to bottom
pub const SLOTS: [FormSlot; 9] = [
    FormSlot::Text(FieldName::Name),
    FormSlot::Text(FieldName::Address),
    FormSlot::Text(FieldName::Mobile),
    FormSlot::Text(FieldName::Email),
    FormSlot::Checkbox(GenderOption::Male),
    FormSlot::Checkbox(GenderOption::Female),
    FormSlot::Text(FieldName::Dob),
    FormSlot::CourseSelect,
    FormSlot::Actions,
];

impl FormSlot {
    /// The form field this slot edits, if any
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Text(field) => Some(*field),
            Self::Checkbox(_) => Some(FieldName::Gender),
            Self::CourseSelect => Some(FieldName::Course),
            Self::Actions => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text(field) => field.label(),
            Self::Checkbox(option) => option.label(),
            Self::CourseSelect => FieldName::Course.label(),
            Self::Actions => "Actions",
        }
    }

    /// Current value as shown in the form
    pub fn display_value(&self, fields: &FormFields) -> String {
        match self {
            Self::Text(field) => fields.text(*field).unwrap_or_default().to_string(),
            Self::Checkbox(option) => {
                let mark = if fields.gender.get(*option) { "x" } else { " " };
                format!("[{mark}] {}", option.label())
            }
            Self::CourseSelect => match fields.course {
                Some(course) => format!("◀ {} ▶", course.label()),
                None => "◀ (select) ▶".to_string(),
            },
            Self::Actions => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::Course;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_field_has_a_slot() {
        for field in FieldName::ALL {
            assert!(SLOTS.iter().any(|slot| slot.field() == Some(field)));
        }
    }

    #[test]
    fn test_actions_is_last() {
        assert_eq!(SLOTS.last(), Some(&FormSlot::Actions));
        assert!(FormSlot::Actions.field().is_none());
    }

    #[test]
    fn test_checkbox_display() {
        let mut fields = FormFields::default();
        fields.gender.set(GenderOption::Male, true);
        assert_eq!(
            FormSlot::Checkbox(GenderOption::Male).display_value(&fields),
            "[x] Male"
        );
        assert_eq!(
            FormSlot::Checkbox(GenderOption::Female).display_value(&fields),
            "[ ] Female"
        );
    }

    #[test]
    fn test_course_display() {
        let mut fields = FormFields::default();
        assert_eq!(
            FormSlot::CourseSelect.display_value(&fields),
            "◀ (select) ▶"
        );
        fields.course = Some(Course::Humanities);
        assert_eq!(FormSlot::CourseSelect.display_value(&fields), "◀ Humanities ▶");
    }

    #[test]
    fn test_text_display() {
        let fields = FormFields {
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            FormSlot::Text(FieldName::Email).display_value(&fields),
            "a@b.com"
        );
    }
}
