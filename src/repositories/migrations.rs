//! Database schema migrations for the contacts table.

use crate::error::StoreError;
use rusqlite::Connection;

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Runs all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    let current = get_schema_version(conn)?;

    if current < 1 {
        migrate_v1(conn)?;
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Creates the contacts table with the email uniqueness constraint (v1).
fn migrate_v1(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS contacts (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            address     TEXT,
            email       TEXT UNIQUE NOT NULL,
            phone       TEXT NOT NULL
        );",
    )
    .map_err(|e| StoreError::Storage(format!("migration v1 failed: {e}")))
}

fn get_schema_version(conn: &Connection) -> Result<u32, StoreError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StoreError::Storage(format!("read schema version: {e}")))
}

fn set_schema_version(conn: &Connection, version: u32) -> Result<(), StoreError> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| StoreError::Storage(format!("write schema version: {e}")))
}
