//! SQLite implementation of `ContactRepository`.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ValidatedContact};
use crate::repositories::migrations::run_migrations;
use crate::repositories::traits::ContactRepository;

/// Column list shared across all SELECT queries.
const COLS: &str = "id, first_name, last_name, address, email, phone";

/// SQLite-backed contact repository.
///
/// The connection is guarded by a `Mutex`: each operation executes to
/// completion while holding the lock, so concurrent requests serialize on
/// the connection and isolation is SQLite's own.
pub struct SqliteContactRepository {
    conn: Mutex<Connection>,
}

impl SqliteContactRepository {
    /// Opens or creates a SQLite database at the given path and runs
    /// pending migrations.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(|e| StoreError::Storage(e.to_string()))?;
        Self::with_connection(conn)
    }

    /// Opens an in-memory database, used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Storage(e.to_string()))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock_conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Storage(format!("connection lock poisoned: {e}")))
    }
}

/// Maps a `rusqlite::Error` to a `StoreError::Storage`.
fn map_sqlite_err(e: rusqlite::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}

/// Maps a `rusqlite::Error` to `DuplicateEmail` when the UNIQUE constraint
/// on the email column fires, `Storage` otherwise.
fn map_constraint_err(e: rusqlite::Error, email: &str) -> StoreError {
    if let rusqlite::Error::SqliteFailure(ref err, _) = e {
        if err.code == rusqlite::ErrorCode::ConstraintViolation {
            return StoreError::DuplicateEmail(email.to_string());
        }
    }
    StoreError::Storage(e.to_string())
}

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        // address is a nullable column; treat NULL as empty
        address: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        email: row.get(4)?,
        phone: row.get(5)?,
    })
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn get(&self, id: i64) -> StoreResult<Option<Contact>> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM contacts WHERE id = ?1");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let result = stmt
            .query_row(params![id], row_to_contact)
            .optional()
            .map_err(map_sqlite_err)?;
        Ok(result)
    }

    async fn list(&self) -> StoreResult<Vec<Contact>> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM contacts ORDER BY id");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let contacts = stmt
            .query_map([], row_to_contact)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(contacts)
    }

    async fn insert(&self, fields: &ValidatedContact) -> StoreResult<Contact> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO contacts (first_name, last_name, address, email, phone)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.first_name.as_str(),
                fields.last_name.as_str(),
                fields.address,
                fields.email.as_str(),
                fields.phone.as_str(),
            ],
        )
        .map_err(|e| map_constraint_err(e, fields.email.as_str()))?;

        let id = conn.last_insert_rowid();
        Ok(Contact {
            id,
            first_name: fields.first_name.as_str().to_string(),
            last_name: fields.last_name.as_str().to_string(),
            address: fields.address.clone(),
            email: fields.email.as_str().to_string(),
            phone: fields.phone.as_str().to_string(),
        })
    }

    async fn update(&self, id: i64, fields: &ValidatedContact) -> StoreResult<()> {
        let conn = self.lock_conn()?;
        let affected = conn
            .execute(
                "UPDATE contacts
                 SET first_name = ?2, last_name = ?3, address = ?4, email = ?5, phone = ?6
                 WHERE id = ?1",
                params![
                    id,
                    fields.first_name.as_str(),
                    fields.last_name.as_str(),
                    fields.address,
                    fields.email.as_str(),
                    fields.phone.as_str(),
                ],
            )
            .map_err(|e| map_constraint_err(e, fields.email.as_str()))?;

        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let conn = self.lock_conn()?;
        let affected = conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])
            .map_err(map_sqlite_err)?;
        Ok(affected > 0)
    }
}
