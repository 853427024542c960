//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::stores::TransactionStore;

/// The state of the REST server.
///
/// The store is opened once at start up and shared by handle with every
/// request, cloning the state only clones the handle.
#[derive(Clone)]
pub struct AppState {
    /// The store that holds every transaction.
    pub transaction_store: Arc<dyn TransactionStore>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to read submitted date-times that do not carry a UTC offset.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] around an already opened `transaction_store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(transaction_store: impl TransactionStore + 'static, local_timezone: &str) -> Self {
        Self {
            transaction_store: Arc::new(transaction_store),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
