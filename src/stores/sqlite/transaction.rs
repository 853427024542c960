//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use time::UtcOffset;

use crate::{
    Error,
    database_id::TransactionId,
    db::initialize,
    stores::{RowsAffected, TransactionStore},
    transaction::{NewTransaction, Transaction, map_transaction_row},
};

/// Stores transactions in a SQLite database.
///
/// The connection is opened once and shared by every clone of the store, so
/// cloning is cheap and all clones see the same data.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// The tables are created if they do not exist yet.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be initialized.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Open the SQLite database at `db_path` and create a store for it.
    ///
    /// `db_path` may be ":memory:" for a database that lives as long as the store.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be opened or initialized.
    pub fn open(db_path: &str) -> Result<Self, Error> {
        let connection = Connection::open(db_path)?;

        Self::new(connection)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error,
    /// or [Error::DatabaseLockError] if the connection lock is poisoned.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.lock()?;

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" (name, description, datetime, price)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, name, description, datetime, price",
            )?
            .query_row(
                (
                    transaction.name,
                    transaction.description,
                    transaction.datetime.to_offset(UtcOffset::UTC),
                    transaction.price,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve all transactions in the database in row order.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error,
    /// or [Error::DatabaseLockError] if the connection lock is poisoned.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;

        connection
            .prepare("SELECT id, name, description, datetime, price FROM \"transaction\"")?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Delete the transaction with `id` from the database.
    ///
    /// Deleting an ID that does not exist is not an error, zero rows are reported instead.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error,
    /// or [Error::DatabaseLockError] if the connection lock is poisoned.
    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;

        connection
            .execute(
                "DELETE FROM \"transaction\" WHERE id = :id",
                &[(":id", &id)],
            )
            .map_err(Error::from)
    }
}
