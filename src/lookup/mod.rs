//! Postal-code address lookup

mod client;
mod traits;
mod types;

pub use client::{ZipcloudClient, DEFAULT_ENDPOINT};
pub use traits::PostalLookup;
pub use types::{AddressLookupResult, LookupError, ADDRESS_NOT_FOUND_NOTICE};

#[cfg(test)]
pub use traits::MockPostalLookup;
#[cfg(test)]
pub use types::AddressCandidate;
