//! Form rendering module
//!
//! - `field_renderer`: single field boxes with inline validation messages
//! - `register_form`: the registration form and its action panel

mod field_renderer;
mod register_form;

pub use register_form::draw_register;
