//! Database layer for the Clientele demo API.
//!
//! Provides SQLite connection pooling (via `r2d2`) and a one-shot schema
//! initializer that creates the four demo tables and inserts the seed rows.
//! The server runs [`init_schema`] to completion before binding its
//! listener, so handlers only ever see a database whose tables exist.
//!
//! # Design decisions
//!
//! - **Embedded SQLite**: the demo store is non-durable by default
//!   (`:memory:`) and is rebuilt and re-seeded on every process start. A
//!   file path works too, in which case the initializer is a no-op after
//!   the first run.
//! - **No migration tracking**: the schema is a fixed set of
//!   `CREATE TABLE IF NOT EXISTS` statements embedded at compile time via
//!   `include_str!`. A versioned migration runner would be machinery this
//!   store never uses.
//! - **Single connection for `:memory:`**: an in-memory SQLite database
//!   lives inside the connection that opened it, so the pool pins exactly
//!   one connection in that mode. See [`create_pool`].

mod pool;
mod schema;

pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
pub use schema::{init_schema, SchemaError};
