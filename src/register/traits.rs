//! Trait abstraction for the registration collaborator to enable mocking in tests

use super::request::RegistrationRequest;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Accepts validated registration requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Register a user, returning the id of the accepted request
    async fn register(&self, request: &RegistrationRequest) -> Result<Uuid>;
}
