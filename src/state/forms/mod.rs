//! Form navigation layer
//!
//! Focus order and cursor state for the registration form. Field values live
//! in `crate::registration::FormStore`.

mod field;
mod form_state;

pub use field::{FormSlot, SLOTS};
pub use form_state::{Form, FormButton, FormCursor};
