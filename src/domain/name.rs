//! PersonName value object.

use super::errors::{NameField, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for a person's first or last name.
///
/// Names are validated at construction time: they must be non-empty and
/// contain alphabetic characters only. Leading and trailing whitespace is
/// trimmed before validation.
///
/// # Example
///
/// ```
/// use contact_book::domain::{NameField, PersonName};
///
/// let name = PersonName::new("Alice", NameField::FirstName).unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName for the given field, validating the value.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty after trimming
    /// - Every character must be alphabetic
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` or
    /// `ValidationError::NonAlphabeticName` naming the offending field.
    pub fn new(name: impl Into<String>, field: NameField) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(ValidationError::EmptyName(field));
        }

        if !name.chars().all(|c| c.is_alphabetic()) {
            return Err(ValidationError::NonAlphabeticName(field, name));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string; field attribution is unknown at
// this point, so errors report the value under first_name.
impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s, NameField::FirstName).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = PersonName::new("Alice", NameField::FirstName).unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_name_trims_whitespace() {
        let name = PersonName::new("  Alice  ", NameField::FirstName).unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_name_rejects_empty() {
        let err = PersonName::new("", NameField::FirstName).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName(NameField::FirstName));

        let err = PersonName::new("   ", NameField::LastName).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName(NameField::LastName));
    }

    #[test]
    fn test_name_rejects_non_alphabetic() {
        assert!(PersonName::new("Alice1", NameField::FirstName).is_err());
        assert!(PersonName::new("O'Brien", NameField::LastName).is_err());
        assert!(PersonName::new("Anne Marie", NameField::FirstName).is_err());
        assert!(PersonName::new("Smith-Jones", NameField::LastName).is_err());
    }

    #[test]
    fn test_name_allows_unicode_letters() {
        assert!(PersonName::new("Émile", NameField::FirstName).is_ok());
        assert!(PersonName::new("Müller", NameField::LastName).is_ok());
    }

    #[test]
    fn test_name_error_names_the_field() {
        let err = PersonName::new("Sm1th", NameField::LastName).unwrap_err();
        assert_eq!(err.field(), "last_name");
    }

    #[test]
    fn test_name_display() {
        let name = PersonName::new("Alice", NameField::FirstName).unwrap();
        assert_eq!(format!("{}", name), "Alice");
    }
}
