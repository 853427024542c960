//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transaction/{transaction_id}', use [format_endpoint].

use crate::database_id::TransactionId;

/// The route for checking that the server is up.
pub const HEALTH_CHECK: &str = "/api/test";
/// The route to create and list transactions.
pub const TRANSACTIONS_API: &str = "/api/transaction";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/api/transaction/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transaction/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: TransactionId) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
