//! Registration form core
//!
//! - `fields`: the data model and field-change events
//! - `validator`: pure validation rules
//! - `store`: the form state store (update, reset, submit)
//! - `error`: validation and input-surface errors
//!
//! The terminal UI drives the store through typed `FieldUpdate`s; config
//! prefill goes through the raw `(fieldName, value)` entry point.

mod error;
mod fields;
mod store;
mod validator;

pub use error::ErrorSet;
pub use fields::{Course, FieldName, FieldUpdate, FormFields, GenderOption};
pub use store::{FormPhase, FormStore, SubmitOutcome};
