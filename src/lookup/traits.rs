//! Trait abstraction for the address lookup service to enable mocking in tests

use super::types::{AddressLookupResult, LookupError};
use async_trait::async_trait;

/// Postal-code to address resolution
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostalLookup: Send + Sync {
    /// Resolve a postal code. An empty result is not an error here.
    async fn lookup(&self, postal_code: &str) -> Result<AddressLookupResult, LookupError>;
}
