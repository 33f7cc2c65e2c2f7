use crate::error::StoreResult;
use crate::models::{Contact, ValidatedContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (SQLite, in-memory mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single contact by id, or `None` if absent.
    async fn get(&self, id: i64) -> StoreResult<Option<Contact>>;

    /// Retrieve all contacts in id order.
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// Insert a new contact, returning it with its assigned id.
    ///
    /// Fails with `StoreError::DuplicateEmail` if the email is already
    /// present.
    async fn insert(&self, fields: &ValidatedContact) -> StoreResult<Contact>;

    /// Replace all fields of an existing contact.
    ///
    /// Fails with `StoreError::NotFound` if the id is absent and with
    /// `StoreError::DuplicateEmail` if the new email belongs to a
    /// different contact.
    async fn update(&self, id: i64, fields: &ValidatedContact) -> StoreResult<()>;

    /// Delete a contact, returning whether a row was removed.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}
