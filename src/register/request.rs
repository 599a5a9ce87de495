//! Registration request handed to the registrar on a valid submission

use crate::state::{FieldName, FormState};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Placeholder written in place of secret values
const REDACTED: &str = "********";

/// Snapshot of a validated form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub fields: BTreeMap<FieldName, String>,
}

impl RegistrationRequest {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            fields: form
                .entries()
                .map(|(name, value)| (name, value.to_string()))
                .collect(),
        }
    }

    pub fn field(&self, name: FieldName) -> Option<&str> {
        self.fields.get(&name).map(String::as_str)
    }

    /// Copy with secret field values masked, for logging
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for (name, value) in copy.fields.iter_mut() {
            if name.is_secret() {
                *value = REDACTED.to_string();
            }
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldSet;
    use pretty_assertions::assert_eq;

    fn form() -> FormState {
        let mut form = FormState::new(FieldSet::FULL);
        form.set(FieldName::Username, "taro".to_string());
        form.set(FieldName::City, "千代田区千代田".to_string());
        form.set(FieldName::Password, "abc12345".to_string());
        form.set(FieldName::ConfirmPassword, "abc12345".to_string());
        form
    }

    #[test]
    fn test_snapshot_holds_every_field() {
        let request = RegistrationRequest::from_form(&form());
        assert_eq!(request.fields.len(), 7);
        assert_eq!(request.field(FieldName::Username), Some("taro"));
        assert_eq!(request.field(FieldName::City), Some("千代田区千代田"));
        assert_eq!(request.field(FieldName::Birthdate), Some(""));
    }

    #[test]
    fn test_snapshot_skips_fields_the_variant_lacks() {
        let form = FormState::new(FieldSet {
            postal_lookup: false,
            birthdate: false,
        });
        let request = RegistrationRequest::from_form(&form);
        assert_eq!(request.fields.len(), 4);
        assert_eq!(request.field(FieldName::City), None);
    }

    #[test]
    fn test_each_request_gets_a_fresh_id() {
        let form = form();
        let a = RegistrationRequest::from_form(&form);
        let b = RegistrationRequest::from_form(&form);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_redacted_masks_passwords_only() {
        let request = RegistrationRequest::from_form(&form());
        let redacted = request.redacted();

        assert_eq!(redacted.field(FieldName::Password), Some(REDACTED));
        assert_eq!(redacted.field(FieldName::ConfirmPassword), Some(REDACTED));
        assert_eq!(redacted.field(FieldName::Username), Some("taro"));
        assert_eq!(redacted.id, request.id);
        // the request itself keeps the real values
        assert_eq!(request.field(FieldName::Password), Some("abc12345"));
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let request = RegistrationRequest::from_form(&form()).redacted();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fields"]["confirmPassword"], REDACTED);
        assert_eq!(json["fields"]["postalCode"], "");
        assert_eq!(json["id"], request.id.to_string());
    }
}
