//! Submission validation for the registration form
//!
//! Rules run in a fixed order and stop at the first failure:
//! password shape, password/birthdate overlap, confirmation match, then the
//! entry checks on username, email and birthdate.

use super::field::FieldName;
use super::form_state::FormState;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Birthdate entry format
const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

// ASCII letters and digits only, at least eight of them.
static PASSWORD_CHARSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{8,}$").expect("PASSWORD_CHARSET_REGEX: invalid regex pattern")
});

static ASCII_LETTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]").expect("ASCII_LETTER_REGEX: invalid regex pattern")
});

static ASCII_DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("ASCII_DIGIT_REGEX: invalid regex pattern"));

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// A user-correctable validation failure, reported inline on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("パスワードは英字と数字を含む8文字以上の英数字で入力してください")]
    WeakPassword,
    #[error("パスワードに生年月日を含めることはできません")]
    PasswordContainsBirthdate,
    #[error("パスワードが一致しません")]
    PasswordMismatch,
    #[error("ユーザー名を入力してください")]
    UsernameRequired,
    #[error("メールアドレスの形式が正しくありません")]
    InvalidEmail,
    #[error("生年月日はYYYY-MM-DD形式の正しい日付で入力してください")]
    InvalidBirthdate,
}

impl ValidationError {
    /// Field the error message is displayed on
    pub fn field(self) -> FieldName {
        match self {
            Self::WeakPassword | Self::PasswordContainsBirthdate => FieldName::Password,
            Self::PasswordMismatch => FieldName::ConfirmPassword,
            Self::UsernameRequired => FieldName::Username,
            Self::InvalidEmail => FieldName::Email,
            Self::InvalidBirthdate => FieldName::Birthdate,
        }
    }
}

/// Run the full pipeline against a form snapshot
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    let password = form.value(FieldName::Password);
    let has_birthdate = form.has_field(FieldName::Birthdate);

    check_password_strength(password)?;
    if has_birthdate {
        check_birthdate_overlap(password, form.value(FieldName::Birthdate))?;
    }
    check_confirmation(password, form.value(FieldName::ConfirmPassword))?;

    check_username(form.value(FieldName::Username))?;
    check_email(form.value(FieldName::Email))?;
    if has_birthdate {
        check_birthdate_format(form.value(FieldName::Birthdate))?;
    }
    Ok(())
}

/// At least one letter, one digit, eight or more characters, letters/digits only
pub fn check_password_strength(password: &str) -> Result<(), ValidationError> {
    if PASSWORD_CHARSET_REGEX.is_match(password)
        && ASCII_LETTER_REGEX.is_match(password)
        && ASCII_DIGIT_REGEX.is_match(password)
    {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

/// Parse a complete `YYYY-MM-DD` date. Partial or padded-differently input is None.
fn parse_birthdate(birthdate: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(birthdate, BIRTHDATE_FORMAT)
        .ok()
        .filter(|date| date.format(BIRTHDATE_FORMAT).to_string() == birthdate)
}

/// Reject passwords containing the birthdate as `YYYY-MM-DD` or `YYYYMMDD`.
/// Empty or unparseable birthdates pass here; the latter fail
/// [`check_birthdate_format`].
pub fn check_birthdate_overlap(password: &str, birthdate: &str) -> Result<(), ValidationError> {
    let Some(date) = parse_birthdate(birthdate) else {
        return Ok(());
    };

    let literal = date.format(BIRTHDATE_FORMAT).to_string();
    let digits = date.format("%Y%m%d").to_string();
    if password.contains(&literal) || password.contains(&digits) {
        Err(ValidationError::PasswordContainsBirthdate)
    } else {
        Ok(())
    }
}

pub fn check_confirmation(password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    if password == confirm_password {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

pub fn check_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        Err(ValidationError::UsernameRequired)
    } else {
        Ok(())
    }
}

pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// An empty birthdate is allowed; anything else must be a real calendar date
pub fn check_birthdate_format(birthdate: &str) -> Result<(), ValidationError> {
    if birthdate.is_empty() || parse_birthdate(birthdate).is_some() {
        Ok(())
    } else {
        Err(ValidationError::InvalidBirthdate)
    }
}
