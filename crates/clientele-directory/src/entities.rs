//! Plain row shapes for the four demo tables.
//!
//! Instances are transient: constructed from a row to shape a response and
//! discarded after serialization. Columns that can hold NULL map to
//! `Option` fields; the join-table timestamps are plain `String` because
//! their `CURRENT_TIMESTAMP` defaults always fire.

use serde::{Deserialize, Serialize};

/// A row of the `Users` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// A row of the `Companies` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: Option<String>,
    pub employees: Option<i64>,
}

/// A row of the `Clients` table.
///
/// `user_id` and `company_id` are declared as foreign keys in the DDL but
/// are not enforced; a row may reference users or companies that do not
/// exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: Option<String>,
    pub user_id: Option<i64>,
    pub company_id: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A row of the `ClientUsers` join table.
///
/// Timestamps are the strings SQLite produces for `CURRENT_TIMESTAMP`; the
/// defaults fire whenever a writer omits the columns. `deleted_at` is the
/// soft-delete marker and `active` has no default, so both stay NULL unless
/// a writer sets them. No code path sets or filters on `deleted_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientUser {
    pub id: i64,
    pub client_id: Option<i64>,
    pub user_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    pub active: Option<bool>,
}
