//! Registration collaborator invoked after a successful validation

mod logging;
mod request;
mod traits;

pub use logging::LoggingRegistrar;
pub use request::RegistrationRequest;
pub use traits::Registrar;

#[cfg(test)]
pub use traits::MockRegistrar;
