//! Contains the trait and implementations for the object that stores [transactions](crate::transaction::Transaction).

mod transaction;

pub mod sqlite;

pub use sqlite::SqliteTransactionStore;
pub use transaction::{RowsAffected, TransactionStore};
