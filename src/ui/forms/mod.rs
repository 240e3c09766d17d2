//! Form rendering module
//!
//! - `field_renderer`: field frame and input rendering
//! - `registration_form`: the registration form layout

mod field_renderer;
mod registration_form;

pub use registration_form::{draw as draw_registration_form, FORM_HEIGHT};
