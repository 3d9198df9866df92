//! Connection pool creation and configuration.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use thiserror::Error;

/// Runtime tunables for SQLite connection behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbRuntimeSettings {
    /// Busy timeout for SQLite connections, in milliseconds.
    pub busy_timeout_ms: u64,

    /// Maximum number of pooled SQLite connections.
    ///
    /// Ignored for `:memory:` databases, which always run on a single
    /// connection.
    pub pool_max_size: u32,
}

impl Default for DbRuntimeSettings {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 5_000,
            pool_max_size: 8,
        }
    }
}

/// A type alias for the SQLite connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Errors that can occur when creating the database pool.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Failed to build the connection pool.
    #[error("failed to create database connection pool: {0}")]
    PoolInit(#[from] r2d2::Error),
}

/// Creates a new SQLite connection pool.
///
/// `db_path` is the path to the database file; `:memory:` (the default
/// configuration) selects a non-durable in-memory store.
///
/// An in-memory database lives inside the connection that opened it: a
/// second pooled connection would see a separate, empty database, and a
/// recycled connection would drop the only copy of the data. For `:memory:`
/// the pool is therefore pinned to one connection with recycling disabled,
/// and every statement execution is serialized by pool checkout.
///
/// Foreign keys are left at SQLite's default (off): the Clients table
/// declares references to Users and Companies, but writes are never
/// rejected for a missing parent row.
///
/// # Errors
///
/// Returns `PoolError::PoolInit` if the connection pool cannot be created.
pub fn create_pool(db_path: &str, settings: DbRuntimeSettings) -> Result<DbPool, PoolError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;

    let in_memory = db_path == ":memory:";

    let manager = SqliteConnectionManager::file(db_path)
        .with_flags(flags)
        .with_init(move |conn| {
            // Set WAL mode and verify it was accepted. In-memory databases
            // report "memory" which is expected and acceptable.
            let journal_mode: String =
                conn.query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))?;
            if journal_mode != "wal" && journal_mode != "memory" {
                return Err(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                    Some(format!(
                        "failed to set WAL journal mode, got: {}",
                        journal_mode
                    )),
                ));
            }
            conn.execute_batch(&format!(
                "PRAGMA busy_timeout = {};",
                settings.busy_timeout_ms
            ))
        });

    let builder = if in_memory {
        Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        Pool::builder().max_size(settings.pool_max_size)
    };

    let pool = builder.build(manager)?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_pool_pins_a_single_connection() {
        let settings = DbRuntimeSettings {
            busy_timeout_ms: 2_500,
            pool_max_size: 3,
        };

        let pool = create_pool(":memory:", settings).expect("pool creation should succeed");
        // The configured size is overridden for :memory:
        assert_eq!(pool.max_size(), 1);

        {
            let conn = pool.get().expect("should get a connection");

            let mode: String = conn
                .query_row("PRAGMA journal_mode;", [], |row| row.get(0))
                .expect("should query journal_mode");
            assert_eq!(mode, "memory");

            let busy_timeout: i32 = conn
                .query_row("PRAGMA busy_timeout;", [], |row| row.get(0))
                .expect("should query busy_timeout");
            assert_eq!(busy_timeout, 2_500);

            conn.execute_batch("CREATE TABLE probe (id INTEGER PRIMARY KEY);")
                .expect("should create probe table");
        }

        // A later checkout must hand back the same connection: the probe
        // table would not exist in a fresh in-memory database.
        let conn = pool.get().expect("should get the pinned connection");
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'probe')",
                [],
                |row| row.get(0),
            )
            .expect("should query sqlite_master");
        assert!(exists, "probe table should survive pool checkout cycles");
    }

    #[test]
    fn file_pool_honors_configured_size_and_wal() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let db_path = dir.path().join("clientele.db");
        let settings = DbRuntimeSettings {
            busy_timeout_ms: 1_000,
            pool_max_size: 3,
        };

        let pool = create_pool(db_path.to_str().unwrap(), settings)
            .expect("pool creation should succeed");
        assert_eq!(pool.max_size(), 3);

        let conn = pool.get().expect("should get a connection");
        let mode: String = conn
            .query_row("PRAGMA journal_mode;", [], |row| row.get(0))
            .expect("should query journal_mode");
        assert_eq!(mode, "wal");
    }

    #[test]
    fn foreign_keys_stay_off() {
        let pool = create_pool(":memory:", DbRuntimeSettings::default())
            .expect("pool creation should succeed");
        let conn = pool.get().expect("should get a connection");

        // Declared FKs are documentation only; enforcement stays disabled.
        let fk: i32 = conn
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .expect("should query foreign_keys");
        assert_eq!(fk, 0);
    }
}
