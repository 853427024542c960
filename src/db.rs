//! Sets up the tables in the application database.

use rusqlite::Connection;

use crate::transaction::create_transaction_table;

/// Create all the tables the application needs.
///
/// Safe to call on a database that has already been initialized, existing
/// tables and rows are left untouched.
///
/// # Errors
/// Returns an error if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_transaction_table(connection)?;

    Ok(())
}
