//! Contact record and form models.

use crate::domain::{EmailAddress, NameField, PersonName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact as stored in the database.
///
/// The `id` is assigned by the store on creation and never changes.
/// Every stored contact satisfied the field validation rules at the time
/// it was written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier for the contact, assigned by the store.
    pub id: i64,

    /// First name (non-empty, alphabetic only)
    pub first_name: String,

    /// Last name (non-empty, alphabetic only)
    pub last_name: String,

    /// Free-text postal address; may be empty
    #[serde(default)]
    pub address: String,

    /// Email address (unique across all contacts)
    pub email: String,

    /// Phone number (exactly 10 digits)
    pub phone: String,
}

impl Contact {
    /// Full display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw contact fields as submitted by the add/edit forms.
///
/// Nothing here is validated; `validate` turns a form into domain value
/// objects or reports the first failing field. The raw form is kept around
/// so handlers can echo submitted values back on error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ContactForm {
    /// Pre-fill a form from a stored contact (for the edit page).
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            address: contact.address.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }

    /// Validate the form fields in submission order.
    ///
    /// Fields are trimmed before validation. Validation stops at the first
    /// failing field: first name, last name, email, then phone.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` for the first offending field.
    pub fn validate(&self) -> Result<ValidatedContact, ValidationError> {
        let first_name = PersonName::new(&self.first_name, NameField::FirstName)?;
        let last_name = PersonName::new(&self.last_name, NameField::LastName)?;
        let email = EmailAddress::new(&self.email)?;
        let phone = PhoneNumber::new(&self.phone)?;

        Ok(ValidatedContact {
            first_name,
            last_name,
            address: self.address.trim().to_string(),
            email,
            phone,
        })
    }
}

/// Contact fields that have passed validation, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub address: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> ContactForm {
        ContactForm {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            address: "1 Main St".to_string(),
            email: "alice@x.com".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_form_validates() {
        let validated = sample_form().validate().unwrap();
        assert_eq!(validated.first_name.as_str(), "Alice");
        assert_eq!(validated.last_name.as_str(), "Smith");
        assert_eq!(validated.address, "1 Main St");
        assert_eq!(validated.email.as_str(), "alice@x.com");
        assert_eq!(validated.phone.as_str(), "5551234567");
    }

    #[test]
    fn test_form_trims_fields() {
        let mut form = sample_form();
        form.first_name = " Alice ".to_string();
        form.address = "  1 Main St  ".to_string();
        let validated = form.validate().unwrap();
        assert_eq!(validated.first_name.as_str(), "Alice");
        assert_eq!(validated.address, "1 Main St");
    }

    #[test]
    fn test_form_allows_empty_address() {
        let mut form = sample_form();
        form.address = String::new();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_form_reports_first_failing_field() {
        let mut form = sample_form();
        form.first_name = "Al1ce".to_string();
        form.email = "bad-email".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field(), "first_name");
    }

    #[test]
    fn test_form_rejects_bad_email() {
        let mut form = sample_form();
        form.email = "bad-email".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_form_rejects_bad_phone() {
        let mut form = sample_form();
        form.phone = "12345".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field(), "phone");
    }

    #[test]
    fn test_form_from_contact_round_trips() {
        let contact = Contact {
            id: 7,
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            address: "1 Main St".to_string(),
            email: "alice@x.com".to_string(),
            phone: "5551234567".to_string(),
        };
        let form = ContactForm::from_contact(&contact);
        assert_eq!(form, sample_form());
    }

    #[test]
    fn test_full_name() {
        let contact = Contact {
            id: 1,
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            address: String::new(),
            email: "alice@x.com".to_string(),
            phone: "5551234567".to_string(),
        };
        assert_eq!(contact.full_name(), "Alice Smith");
    }

    #[test]
    fn test_form_missing_fields_default_to_empty() {
        let form: ContactForm = serde_json::from_str(r#"{"first_name":"Alice"}"#).unwrap();
        assert_eq!(form.first_name, "Alice");
        assert_eq!(form.email, "");
        assert!(form.validate().is_err());
    }
}
