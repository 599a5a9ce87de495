//! Form domain layer
//!
//! Field values, inline validation errors and the submission rules of the
//! registration form.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FieldSet, FormField};
pub use form_state::{Form, FormButton, FormPhase, FormState, RegistrationForm};
#[cfg(test)]
pub use validation::ValidationError;
