//! Form field value objects

use serde::Serialize;
use std::fmt;

/// Character used to mask secret field values
const MASK_CHAR: char = '•';

/// Every field a registration form variant can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Username,
    Email,
    PostalCode,
    City,
    Birthdate,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Key used for the field in submitted records
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::PostalCode => "postalCode",
            Self::City => "city",
            Self::Birthdate => "birthdate",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "ユーザー名",
            Self::Email => "メールアドレス",
            Self::PostalCode => "郵便番号",
            Self::City => "市町村",
            Self::Birthdate => "生年月日 (YYYY-MM-DD)",
            Self::Password => "パスワード",
            Self::ConfirmPassword => "パスワード（確認）",
        }
    }

    /// Secret fields are never rendered or logged in clear text
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which optional fields a form variant carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    /// Postal code with address search, plus the derived city
    pub postal_lookup: bool,
    pub birthdate: bool,
}

impl FieldSet {
    pub const FULL: Self = Self {
        postal_lookup: true,
        birthdate: true,
    };

    /// Fields in display order
    pub fn fields(&self) -> Vec<FieldName> {
        let mut fields = vec![FieldName::Username, FieldName::Email];
        if self.postal_lookup {
            fields.push(FieldName::PostalCode);
            fields.push(FieldName::City);
        }
        if self.birthdate {
            fields.push(FieldName::Birthdate);
        }
        fields.push(FieldName::Password);
        fields.push(FieldName::ConfirmPassword);
        fields
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::FULL
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    /// Create a new empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            label: name.label(),
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_secret(&self) -> bool {
        self.name.is_secret()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret() {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}
