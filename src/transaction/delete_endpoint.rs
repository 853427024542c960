//! Defines the endpoint for deleting a transaction.
use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, database_id::TransactionId, stores::TransactionStore,
    transaction::delete_transaction,
};

/// The message sent back after a delete request succeeds.
pub const DELETE_SUCCESS_MESSAGE: &str = "Transaction deleted successfully";
/// The message sent back after a delete request fails.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete transaction";

/// The body of a successful delete response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always [DELETE_SUCCESS_MESSAGE].
    pub message: String,
}

/// The body of a failed delete response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteErrorResponse {
    /// Always [DELETE_FAILED_MESSAGE].
    pub error: String,
}

/// The state needed to delete a transaction.
#[derive(Clone)]
pub struct DeleteTransactionState {
    /// The store for managing transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Responds with 200 whether or not the transaction existed. Any fault,
/// including an ID that the store cannot interpret, responds with 500.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let result = transaction_id
        .parse::<TransactionId>()
        .map_err(|_| Error::InvalidTransactionId(transaction_id.clone()))
        .and_then(|id| delete_transaction(id, state.transaction_store.as_ref()));

    match result {
        Ok(()) => Json(DeleteResponse {
            message: DELETE_SUCCESS_MESSAGE.to_owned(),
        })
        .into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeleteErrorResponse {
                    error: DELETE_FAILED_MESSAGE.to_owned(),
                }),
            )
                .into_response()
        }
    }
}
