//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! person names, email addresses, and phone numbers. These value objects
//! provide validation at construction time and prevent invalid data from
//! being represented in the system.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use email::EmailAddress;
pub use errors::{NameField, ValidationError};
pub use name::PersonName;
pub use phone::PhoneNumber;
