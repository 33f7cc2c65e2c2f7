//! Contact service layer.
//!
//! Business logic for the contact store: validates submitted fields, maps
//! storage conflicts to typed errors, and exposes the CRUD operations the
//! HTTP handlers call.

use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactForm};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts, in id order (stable within a process run).
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// One contact by id.
    ///
    /// Fails with `StoreError::NotFound` if the id is absent.
    async fn get(&self, id: i64) -> StoreResult<Contact>;

    /// Validate the form and store a new contact.
    ///
    /// Fails with `StoreError::Validation` naming the first failing field,
    /// or `StoreError::DuplicateEmail` if the email is already present.
    /// On success returns the contact with its assigned id.
    async fn create(&self, form: &ContactForm) -> StoreResult<Contact>;

    /// Validate the form and replace all fields of an existing contact.
    ///
    /// Same validation as `create`. Fails with `StoreError::NotFound` for
    /// an unknown id, and with `StoreError::DuplicateEmail` only when the
    /// new email collides with a *different* contact; updating a contact
    /// to its own unchanged email succeeds.
    async fn update(&self, id: i64, form: &ContactForm) -> StoreResult<Contact>;

    /// Remove a contact. Idempotent: deleting an absent id is a no-op.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Default implementation of ContactService backed by a repository.
pub struct ContactServiceImpl {
    repo: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        self.repo.list().await
    }

    async fn get(&self, id: i64) -> StoreResult<Contact> {
        self.repo.get(id).await?.ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, form: &ContactForm) -> StoreResult<Contact> {
        let fields = form.validate()?;
        let contact = self.repo.insert(&fields).await?;
        info!(id = contact.id, email = %contact.email, "contact created");
        Ok(contact)
    }

    async fn update(&self, id: i64, form: &ContactForm) -> StoreResult<Contact> {
        let fields = form.validate()?;
        self.repo.update(id, &fields).await?;
        info!(id, email = %fields.email, "contact updated");
        Ok(Contact {
            id,
            first_name: fields.first_name.into_inner(),
            last_name: fields.last_name.into_inner(),
            address: fields.address,
            email: fields.email.into_inner(),
            phone: fields.phone.into_inner(),
        })
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let removed = self.repo.delete(id).await?;
        if removed {
            info!(id, "contact deleted");
        } else {
            debug!(id, "delete of absent contact ignored");
        }
        Ok(())
    }
}
