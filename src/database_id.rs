//! Database ID type definition.

/// Alias for the integer type the store assigns to a new transaction.
///
/// Callers should treat the value as opaque: it is only ever used to key
/// deletions and to identify rows when rendering a list.
pub type TransactionId = i64;
