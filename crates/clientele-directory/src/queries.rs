//! Parameterized statement library for the demo tables.

use crate::entities::{Client, Company, User};
use rusqlite::{params, Connection, Row};
use thiserror::Error;

/// Errors that can occur during directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Columns written by [`update_user`]. Absent fields are stored as NULL.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Columns for a new client row. Absent fields are stored as NULL.
#[derive(Debug, Clone, Default)]
pub struct CreateClientParams {
    pub name: Option<String>,
    pub user_id: Option<i64>,
    pub company_id: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Columns written by [`update_client`]. Absent fields are stored as NULL.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Returns every user row.
pub fn list_users(conn: &Connection) -> Result<Vec<User>, DirectoryError> {
    let mut stmt = conn.prepare("SELECT id, username, email FROM Users")?;
    let rows = stmt.query_map([], map_row_to_user)?;
    let mut users = Vec::new();
    for row in rows {
        users.push(row?);
    }
    Ok(users)
}

/// Rewrites the username and email columns for `user_id`.
///
/// Both columns are always written; an absent field nulls its column.
/// Returns the affected-row count; an unknown id affects zero rows and is
/// not an error here.
pub fn update_user(
    conn: &Connection,
    user_id: i64,
    updates: &UpdateUserParams,
) -> Result<usize, DirectoryError> {
    let count = conn.execute(
        "UPDATE Users SET username = ?1, email = ?2 WHERE id = ?3",
        params![updates.username, updates.email, user_id],
    )?;
    Ok(count)
}

/// Inserts a client row and returns the assigned id.
///
/// The `user_id` and `company_id` references are not checked against their
/// parent tables; callers wanting that guarantee must check first.
pub fn insert_client(conn: &Connection, client: &CreateClientParams) -> Result<i64, DirectoryError> {
    conn.execute(
        "INSERT INTO Clients (name, user_id, company_id, email, phone) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            client.name,
            client.user_id,
            client.company_id,
            client.email,
            client.phone,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rewrites the name, email, and phone columns for `client_id`.
///
/// Returns the affected-row count; an unknown id affects zero rows.
pub fn update_client(
    conn: &Connection,
    client_id: i64,
    updates: &UpdateClientParams,
) -> Result<usize, DirectoryError> {
    let count = conn.execute(
        "UPDATE Clients SET name = ?1, email = ?2, phone = ?3 WHERE id = ?4",
        params![updates.name, updates.email, updates.phone, client_id],
    )?;
    Ok(count)
}

/// Returns companies whose employee count lies in
/// `[min_employees, max_employees]`, bounds inclusive.
///
/// Not wired to any HTTP route; exposed as library surface.
pub fn companies_by_employee_range(
    conn: &Connection,
    min_employees: i64,
    max_employees: i64,
) -> Result<Vec<Company>, DirectoryError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, employees FROM Companies \
         WHERE employees >= ?1 AND employees <= ?2",
    )?;
    let rows = stmt.query_map(params![min_employees, max_employees], map_row_to_company)?;
    let mut companies = Vec::new();
    for row in rows {
        companies.push(row?);
    }
    Ok(companies)
}

/// Returns clients belonging to `user_id` whose name matches `name_pattern`.
///
/// The pattern uses SQL LIKE syntax (`%` and `_` wildcards) with SQLite's
/// default matching, which is case-insensitive for ASCII. Not wired to any
/// HTTP route; exposed as library surface.
pub fn clients_by_user_and_name(
    conn: &Connection,
    user_id: i64,
    name_pattern: &str,
) -> Result<Vec<Client>, DirectoryError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, user_id, company_id, email, phone FROM Clients \
         WHERE user_id = ?1 AND name LIKE ?2",
    )?;
    let rows = stmt.query_map(params![user_id, name_pattern], map_row_to_client)?;
    let mut clients = Vec::new();
    for row in rows {
        clients.push(row?);
    }
    Ok(clients)
}

fn map_row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
    })
}

fn map_row_to_company(row: &Row) -> rusqlite::Result<Company> {
    Ok(Company {
        id: row.get(0)?,
        name: row.get(1)?,
        employees: row.get(2)?,
    })
}

fn map_row_to_client(row: &Row) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        name: row.get(1)?,
        user_id: row.get(2)?,
        company_id: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientele_db::init_schema;

    fn seeded_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("should open in-memory db");
        init_schema(&conn).expect("schema init should succeed");
        conn
    }

    fn acme_contact() -> CreateClientParams {
        CreateClientParams {
            name: Some("Acme Contact".to_string()),
            user_id: Some(1),
            company_id: Some(1),
            email: Some("a@b.com".to_string()),
            phone: Some("555".to_string()),
        }
    }

    #[test]
    fn list_users_returns_the_seed_row() {
        let conn = seeded_conn();
        let users = list_users(&conn).expect("listing should succeed");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].username.as_deref(), Some("user1"));
        assert_eq!(users[0].email.as_deref(), Some("user1@example.com"));
    }

    #[test]
    fn update_user_rewrites_both_columns() {
        let conn = seeded_conn();
        let updates = UpdateUserParams {
            username: Some("renamed".to_string()),
            email: Some("renamed@example.com".to_string()),
        };

        let count = update_user(&conn, 1, &updates).expect("update should succeed");
        assert_eq!(count, 1);

        let users = list_users(&conn).expect("listing should succeed");
        assert_eq!(users[0].username.as_deref(), Some("renamed"));
        assert_eq!(users[0].email.as_deref(), Some("renamed@example.com"));
    }

    #[test]
    fn update_user_nulls_absent_fields() {
        let conn = seeded_conn();

        let count =
            update_user(&conn, 1, &UpdateUserParams::default()).expect("update should succeed");
        assert_eq!(count, 1);

        let users = list_users(&conn).expect("listing should succeed");
        assert_eq!(users[0].username, None);
        assert_eq!(users[0].email, None);
    }

    #[test]
    fn update_user_with_unknown_id_affects_no_rows() {
        let conn = seeded_conn();
        let updates = UpdateUserParams {
            username: Some("ghost".to_string()),
            email: None,
        };

        let count = update_user(&conn, 999_999, &updates).expect("update should succeed");
        assert_eq!(count, 0);

        // The seed row is untouched.
        let users = list_users(&conn).expect("listing should succeed");
        assert_eq!(users[0].username.as_deref(), Some("user1"));
    }

    #[test]
    fn insert_client_returns_the_new_row_id() {
        let conn = seeded_conn();

        let id = insert_client(&conn, &acme_contact()).expect("insert should succeed");
        assert_eq!(id, 1);

        let clients =
            clients_by_user_and_name(&conn, 1, "Acme%").expect("filter should succeed");
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, id);
        assert_eq!(clients[0].company_id, Some(1));
        assert_eq!(clients[0].email.as_deref(), Some("a@b.com"));
        assert_eq!(clients[0].phone.as_deref(), Some("555"));
    }

    #[test]
    fn insert_client_accepts_dangling_references() {
        let conn = seeded_conn();
        let client = CreateClientParams {
            name: Some("Orphan".to_string()),
            user_id: Some(424_242),
            company_id: Some(424_242),
            email: None,
            phone: None,
        };

        // FKs are declared but unenforced; the insert goes through.
        let id = insert_client(&conn, &client).expect("insert should succeed");
        assert!(id > 0);
    }

    #[test]
    fn update_client_rewrites_contact_fields() {
        let conn = seeded_conn();
        let id = insert_client(&conn, &acme_contact()).expect("insert should succeed");

        let updates = UpdateClientParams {
            name: Some("Acme Billing".to_string()),
            email: Some("billing@acme.example".to_string()),
            phone: None,
        };
        let count = update_client(&conn, id, &updates).expect("update should succeed");
        assert_eq!(count, 1);

        let clients =
            clients_by_user_and_name(&conn, 1, "Acme Billing").expect("filter should succeed");
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].phone, None, "absent fields null their column");
        // The untouched ownership columns survive.
        assert_eq!(clients[0].user_id, Some(1));
    }

    #[test]
    fn update_client_with_unknown_id_affects_no_rows() {
        let conn = seeded_conn();
        let count = update_client(&conn, 999, &UpdateClientParams::default())
            .expect("update should succeed");
        assert_eq!(count, 0);
    }

    #[test]
    fn company_range_bounds_are_inclusive() {
        let conn = seeded_conn();

        // Seed company has 100 employees.
        let hit = companies_by_employee_range(&conn, 50, 150).expect("range should succeed");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].name.as_deref(), Some("Company A"));

        let exact = companies_by_employee_range(&conn, 100, 100).expect("range should succeed");
        assert_eq!(exact.len(), 1);

        let miss = companies_by_employee_range(&conn, 200, 300).expect("range should succeed");
        assert!(miss.is_empty());
    }

    #[test]
    fn clients_by_user_and_name_filters_on_both() {
        let conn = seeded_conn();
        insert_client(&conn, &acme_contact()).expect("insert should succeed");

        let other_user = CreateClientParams {
            name: Some("Acme Contact".to_string()),
            user_id: Some(2),
            ..CreateClientParams::default()
        };
        insert_client(&conn, &other_user).expect("insert should succeed");

        let matches = clients_by_user_and_name(&conn, 1, "Acme%").expect("filter should succeed");
        assert_eq!(matches.len(), 1, "other users' clients are excluded");
        assert_eq!(matches[0].user_id, Some(1));

        // SQLite LIKE is case-insensitive for ASCII by default.
        let lower = clients_by_user_and_name(&conn, 1, "acme%").expect("filter should succeed");
        assert_eq!(lower.len(), 1);

        let none = clients_by_user_and_name(&conn, 1, "Globex%").expect("filter should succeed");
        assert!(none.is_empty());
    }
}
