//! The operations the API offers on transactions, independent of HTTP.

use crate::{
    Error,
    database_id::TransactionId,
    stores::TransactionStore,
    transaction::{Transaction, TransactionFields},
};

/// Validate `fields` and persist them as a new transaction.
///
/// Nothing is stored unless every field is valid. `local_timezone` is used to
/// read date-times that do not specify an offset.
///
/// # Errors
/// This function will return a:
/// - [Error::MissingFields] or [Error::InvalidField] if validation fails,
/// - [Error::InvalidTimezone] if `local_timezone` is needed but invalid,
/// - or a store error if the transaction could not be persisted.
pub fn create_transaction(
    fields: TransactionFields,
    local_timezone: &str,
    store: &dyn TransactionStore,
) -> Result<Transaction, Error> {
    let new_transaction = fields.validate(local_timezone)?;

    store.create(new_transaction)
}

/// Get every stored transaction in store order.
///
/// # Errors
/// Returns a store error if the transactions could not be read.
pub fn list_transactions(store: &dyn TransactionStore) -> Result<Vec<Transaction>, Error> {
    store.get_all()
}

/// Delete the transaction with `id`.
///
/// Succeeds whether or not a transaction with `id` existed.
///
/// # Errors
/// Returns a store error if the delete could not be executed.
pub fn delete_transaction(id: TransactionId, store: &dyn TransactionStore) -> Result<(), Error> {
    let rows_affected = store.delete(id)?;

    if rows_affected == 0 {
        tracing::debug!("tried to delete transaction {id} which does not exist");
    }

    Ok(())
}
