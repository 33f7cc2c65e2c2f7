//! Field-level validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected input so callers can echo it back
/// to the user alongside the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name field is empty.
    EmptyName(NameField),

    /// A name field contains non-alphabetic characters.
    NonAlphabeticName(NameField, String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),
}

/// Which name field a name validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    FirstName,
    LastName,
}

impl NameField {
    /// Form field name as submitted by the HTML forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
        }
    }
}

impl ValidationError {
    /// The form field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName(f) | Self::NonAlphabeticName(f, _) => f.as_str(),
            Self::InvalidEmail(_) => "email",
            Self::InvalidPhone(_) => "phone",
        }
    }

    /// User-facing message, mirroring the wording shown in the forms.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyName(_) | Self::NonAlphabeticName(..) => {
                "First name and Last name must contain only letters"
            }
            Self::InvalidEmail(_) => "Please enter a valid email address",
            Self::InvalidPhone(_) => "Phone number must contain exactly 10 digits",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName(field) => write!(f, "{} cannot be empty", field.as_str()),
            Self::NonAlphabeticName(field, value) => {
                write!(f, "{} must contain only letters: {}", field.as_str(), value)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
