//! Contact Book - a small self-hosted contact manager.
//!
//! This library provides a web application for listing, adding, editing,
//! and deleting contact records, backed by a single SQLite table with an
//! email uniqueness constraint.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, emails, and phone numbers
//! - **models**: Contact record and raw form submissions
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Storage trait and the SQLite implementation
//! - **services**: The contact store (validation + CRUD business logic)
//! - **server**: Axum router, handlers, and HTML views

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, StoreError, StoreResult};
pub use models::{Contact, ContactForm};
pub use repositories::{ContactRepository, SqliteContactRepository};
pub use server::{build_router, AppState, HttpServer};
pub use services::{ContactService, ContactServiceImpl};
