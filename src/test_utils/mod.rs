#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;

use std::sync::Arc;

use rusqlite::Connection;

use crate::{
    Error,
    database_id::TransactionId,
    stores::{RowsAffected, SqliteTransactionStore, TransactionStore},
    transaction::{NewTransaction, Transaction},
};

pub(crate) use form::{assert_form_input, assert_form_submit_button_with_text, must_get_form};
pub(crate) use html::{assert_valid_html, parse_html_document};

/// A store backed by a fresh in-memory SQLite database.
pub(crate) fn get_test_store() -> Arc<SqliteTransactionStore> {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");

    Arc::new(SqliteTransactionStore::new(connection).expect("Could not initialize database."))
}

/// A store whose every operation fails as if the database were unreachable.
pub(crate) struct FailingStore;

impl TransactionStore for FailingStore {
    fn create(&self, _transaction: NewTransaction) -> Result<Transaction, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn delete(&self, _id: TransactionId) -> Result<RowsAffected, Error> {
        Err(Error::DatabaseLockError)
    }
}
