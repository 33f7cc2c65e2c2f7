//! Data models for contacts and form submissions.

mod contact;

pub use contact::{Contact, ContactForm, ValidatedContact};
