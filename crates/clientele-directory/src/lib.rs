//! Directory model for the Clientele demo API: entity records, the
//! parameterized query library, and the email validation utility.
//!
//! The four entity structs mirror table rows one-to-one and carry no
//! behavior. Query functions take a borrowed [`rusqlite::Connection`] and
//! issue exactly one statement each; the HTTP layer decides what a zero-row
//! update means. Two of the queries (`companies_by_employee_range`,
//! `clients_by_user_and_name`) and the email validator are exposed library
//! surface with no route behind them.

mod entities;
mod queries;
mod validation;

pub use entities::{Client, ClientUser, Company, User};
pub use queries::{
    clients_by_user_and_name, companies_by_employee_range, insert_client, list_users,
    update_client, update_user, CreateClientParams, DirectoryError, UpdateClientParams,
    UpdateUserParams,
};
pub use validation::validate_email;
