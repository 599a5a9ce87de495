//! Address lookup response and error types

use serde::Deserialize;

/// User-facing notice when a postal code resolves to nothing
pub const ADDRESS_NOT_FOUND_NOTICE: &str = "市町村が見つかりません";

/// One candidate address returned by the lookup service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddressCandidate {
    /// Prefecture
    pub address1: String,
    /// Municipality
    pub address2: String,
    /// Town area
    pub address3: String,
    /// Prefecture code
    pub prefcode: String,
    pub zipcode: String,
}

impl AddressCandidate {
    /// Text written into the city field
    pub fn city_line(&self) -> String {
        format!("{}{}", self.address2, self.address3)
    }
}

/// Raw response body of the lookup service
#[derive(Debug, Clone, Deserialize)]
pub(super) struct LookupResponse {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<AddressCandidate>>,
}

/// Decoded lookup result, possibly empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressLookupResult {
    pub candidates: Vec<AddressCandidate>,
}

impl AddressLookupResult {
    /// City line of the first candidate
    pub fn resolve_city(&self, postal_code: &str) -> Result<String, LookupError> {
        self.candidates
            .first()
            .map(AddressCandidate::city_line)
            .ok_or_else(|| LookupError::AddressNotFound {
                postal_code: postal_code.to_string(),
            })
    }
}

/// Errors from the address lookup flow
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no address found for postal code {postal_code}")]
    AddressNotFound { postal_code: String },
    #[error("address lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl LookupError {
    /// Whether the user should be told about this failure
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::AddressNotFound { .. })
    }
}
