//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction},
};

/// The number of rows changed by a write to the store.
pub type RowsAffected = usize;

/// Handles the creation, retrieval and deletion of transactions.
///
/// Implementers are shared between concurrent requests, so any connection
/// they hold must be safe to use from several threads.
pub trait TransactionStore: Send + Sync {
    /// Persist `transaction` and return it with its newly assigned ID.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve every transaction in the order the store keeps them.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Remove the transaction with `id`, if there is one.
    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error>;
}
