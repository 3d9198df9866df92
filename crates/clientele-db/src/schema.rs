//! One-shot schema initializer.
//!
//! The DDL is embedded at compile time and issued inside a single
//! transaction on every start. Table creation uses `IF NOT EXISTS`, and the
//! seed rows (one demo user, one demo company) are inserted only when both
//! tables are empty, so re-running the initializer never duplicates data.

use rusqlite::{params, Connection};
use thiserror::Error;

/// The embedded table definitions.
const INIT_SQL: &str = include_str!("schema/init.sql");

/// Errors that can occur during schema initialization.
///
/// Any of these is fatal at startup: the server must not accept requests
/// against a database whose tables may be missing.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A table-creation statement failed.
    #[error("schema creation failed: {0}")]
    Create(rusqlite::Error),

    /// Inserting or checking a seed row failed.
    #[error("seeding demo rows failed: {0}")]
    Seed(rusqlite::Error),
}

/// Creates the four demo tables if absent and seeds the demo rows.
///
/// Returns `true` when the seed user and company were inserted on this run,
/// `false` when they were already present. Runs everything in one
/// transaction so a failure leaves no partial schema behind.
///
/// # Errors
///
/// Returns [`SchemaError`] if any DDL statement or seed insert fails.
pub fn init_schema(conn: &Connection) -> Result<bool, SchemaError> {
    let tx = conn.unchecked_transaction().map_err(SchemaError::Create)?;

    tx.execute_batch(INIT_SQL).map_err(SchemaError::Create)?;
    let seeded = seed_demo_rows(&tx)?;

    tx.commit().map_err(SchemaError::Create)?;
    Ok(seeded)
}

/// Inserts the demo user and company when the tables are empty.
fn seed_demo_rows(conn: &Connection) -> Result<bool, SchemaError> {
    let users: i64 = conn
        .query_row("SELECT COUNT(*) FROM Users", [], |row| row.get(0))
        .map_err(SchemaError::Seed)?;
    let companies: i64 = conn
        .query_row("SELECT COUNT(*) FROM Companies", [], |row| row.get(0))
        .map_err(SchemaError::Seed)?;

    if users > 0 || companies > 0 {
        tracing::debug!("demo rows already present, skipping seed");
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO Users (username, email) VALUES (?1, ?2)",
        params!["user1", "user1@example.com"],
    )
    .map_err(SchemaError::Seed)?;

    conn.execute(
        "INSERT INTO Companies (name, employees) VALUES (?1, ?2)",
        params!["Company A", 100],
    )
    .map_err(SchemaError::Seed)?;

    Ok(true)
}
