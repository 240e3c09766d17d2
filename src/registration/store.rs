//! Form state store
//!
//! Owns the current field values and the last computed error set. All
//! mutation of either goes through this type.

use super::error::{ErrorSet, InputError};
use super::fields::{FieldUpdate, FormFields};
use super::validator::validate;

/// Observational state of the store. Not enforced: edits are accepted in
/// every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    SubmittedInvalid,
    SubmittedValid,
}

impl FormPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::SubmittedInvalid => "Needs fixes",
            Self::SubmittedValid => "Registered",
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed; carries a copy of the submitted values
    Accepted(FormFields),
    /// At least one rule failed
    Rejected(ErrorSet),
}

#[derive(Debug, Clone, Default)]
pub struct FormStore {
    fields: FormFields,
    errors: ErrorSet,
    phase: FormPhase,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Errors from the last submit. Stale once fields are edited.
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Overwrite one field. No validation happens here.
    pub fn update_field(&mut self, update: FieldUpdate) {
        tracing::debug!(field = %update.field(), "field updated");
        update.apply(&mut self.fields);
        if self.phase == FormPhase::SubmittedValid {
            self.phase = FormPhase::Editing;
        }
    }

    /// Apply a raw `(fieldName, value)` event from an input surface
    pub fn update_field_raw(&mut self, name: &str, value: &str) -> Result<(), InputError> {
        let update = FieldUpdate::parse(name, value)?;
        self.update_field(update);
        Ok(())
    }

    /// Restore the blank form and clear errors
    pub fn reset(&mut self) {
        tracing::info!("form reset");
        self.fields = FormFields::default();
        self.errors.clear();
        self.phase = FormPhase::Editing;
    }

    /// Validate the current values and record the result.
    ///
    /// Calling this twice without edits in between yields equal outcomes.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.fields);
        if self.errors.is_empty() {
            self.phase = FormPhase::SubmittedValid;
            tracing::info!("registration accepted");
            SubmitOutcome::Accepted(self.fields.clone())
        } else {
            self.phase = FormPhase::SubmittedInvalid;
            for error in self.errors.iter() {
                tracing::debug!(%error, "rule failed");
            }
            tracing::info!(error_count = self.errors.len(), "registration rejected");
            SubmitOutcome::Rejected(self.errors.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::fields::{Course, FieldName, GenderOption};
    use crate::registration::validator::tests::valid_fields;

    fn filled_store() -> FormStore {
        let mut store = FormStore::new();
        let fields = valid_fields();
        store.update_field(FieldUpdate::Name(fields.name));
        store.update_field(FieldUpdate::Address(fields.address));
        store.update_field(FieldUpdate::Mobile(fields.mobile));
        store.update_field(FieldUpdate::Email(fields.email));
        store.update_field(FieldUpdate::Gender(GenderOption::Female, true));
        store.update_field(FieldUpdate::Dob(fields.dob));
        store.update_field(FieldUpdate::Course(fields.course));
        store
    }

    mod update {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_store_is_blank() {
            let store = FormStore::new();
            assert_eq!(store.fields(), &FormFields::default());
            assert!(store.errors().is_empty());
            assert_eq!(store.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_update_does_not_validate() {
            let mut store = FormStore::new();
            store.update_field(FieldUpdate::Mobile("abc".to_string()));
            assert_eq!(store.fields().mobile, "abc");
            assert!(store.errors().is_empty());
        }

        #[test]
        fn test_gender_updates_leave_other_box_alone() {
            let mut store = FormStore::new();
            store.update_field(FieldUpdate::Gender(GenderOption::Male, true));
            store.update_field(FieldUpdate::Gender(GenderOption::Female, true));
            assert!(store.fields().gender.male);
            assert!(store.fields().gender.female);

            store.update_field(FieldUpdate::Gender(GenderOption::Male, false));
            assert!(!store.fields().gender.male);
            assert!(store.fields().gender.female);
        }

        #[test]
        fn test_raw_updates() {
            let mut store = FormStore::new();
            store.update_field_raw("name", "Grace").unwrap();
            store.update_field_raw("gender:male", "true").unwrap();
            store.update_field_raw("course", "humanities").unwrap();
            assert_eq!(store.fields().name, "Grace");
            assert!(store.fields().gender.male);
            assert_eq!(store.fields().course, Some(Course::Humanities));
        }

        #[test]
        fn test_raw_update_rejects_unknown_field_without_mutating() {
            let mut store = filled_store();
            let before = store.fields().clone();
            assert_eq!(
                store.update_field_raw("nickname", "x"),
                Err(InputError::UnknownField("nickname".to_string()))
            );
            assert_eq!(store.fields(), &before);
        }

        #[test]
        fn test_edit_keeps_stale_errors() {
            let mut store = FormStore::new();
            store.submit();
            store.update_field(FieldUpdate::Name("Grace".to_string()));
            assert!(store.errors().contains(FieldName::Name));
            assert_eq!(store.phase(), FormPhase::SubmittedInvalid);
        }

        #[test]
        fn test_edit_after_success_returns_to_editing() {
            let mut store = filled_store();
            assert!(matches!(store.submit(), SubmitOutcome::Accepted(_)));
            store.update_field(FieldUpdate::Address("Elsewhere".to_string()));
            assert_eq!(store.phase(), FormPhase::Editing);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submit_returns_snapshot() {
            let mut store = filled_store();
            let outcome = store.submit();
            assert_eq!(outcome, SubmitOutcome::Accepted(valid_fields()));
            assert!(store.errors().is_empty());
            assert_eq!(store.phase(), FormPhase::SubmittedValid);
        }

        #[test]
        fn test_snapshot_is_independent_of_later_edits() {
            let mut store = filled_store();
            let SubmitOutcome::Accepted(snapshot) = store.submit() else {
                panic!("expected accepted submit");
            };
            store.update_field(FieldUpdate::Name("Someone Else".to_string()));
            assert_eq!(snapshot.name, valid_fields().name);
        }

        #[test]
        fn test_invalid_submit_stores_errors() {
            let mut store = filled_store();
            store.update_field(FieldUpdate::Email("a@b".to_string()));
            let outcome = store.submit();

            let SubmitOutcome::Rejected(errors) = outcome else {
                panic!("expected rejected submit");
            };
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FieldName::Email]);
            assert_eq!(store.errors(), &errors);
            assert_eq!(store.phase(), FormPhase::SubmittedInvalid);
        }

        #[test]
        fn test_resubmit_after_fix_clears_errors() {
            let mut store = filled_store();
            store.update_field(FieldUpdate::Gender(GenderOption::Male, true));
            assert!(matches!(store.submit(), SubmitOutcome::Rejected(_)));

            store.update_field(FieldUpdate::Gender(GenderOption::Male, false));
            assert!(matches!(store.submit(), SubmitOutcome::Accepted(_)));
            assert!(store.errors().is_empty());
        }

        #[test]
        fn test_submit_is_idempotent() {
            let mut store = FormStore::new();
            store.update_field(FieldUpdate::Name("Bob 1".to_string()));
            let first = store.submit();
            let first_errors = store.errors().clone();
            let second = store.submit();
            assert_eq!(first, second);
            assert_eq!(store.errors(), &first_errors);

            let mut store = filled_store();
            assert_eq!(store.submit(), store.submit());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_blank_state() {
            let mut store = filled_store();
            store.update_field(FieldUpdate::Mobile("1".to_string()));
            store.submit();
            store.reset();
            assert_eq!(store.fields(), &FormFields::default());
            assert!(store.errors().is_empty());
            assert_eq!(store.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_reset_then_validate_matches_fresh_form() {
            let mut store = filled_store();
            store.reset();
            assert_eq!(validate(store.fields()), validate(&FormFields::default()));
            assert_eq!(validate(store.fields()).len(), 7);
        }

        #[test]
        fn test_reset_on_fresh_store_is_harmless() {
            let mut store = FormStore::new();
            store.reset();
            store.reset();
            assert_eq!(store.fields(), &FormFields::default());
        }
    }
}
