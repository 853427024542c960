//! Contains the SQLite backed implementation of the store traits.

mod transaction;

pub use transaction::SqliteTransactionStore;
