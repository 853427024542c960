//! Defines the endpoint for creating a new transaction.
use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    stores::TransactionStore,
    transaction::{TransactionFields, create_transaction},
};

/// The state needed to create a transaction.
#[derive(Clone)]
pub struct CreateTransactionState {
    /// The store for managing transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for creating a new transaction, responds with the stored
/// transaction as JSON.
///
/// Responds with 400 and a plain text reason if the body is not valid JSON or
/// a field is missing, and with 500 if the transaction could not be stored.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    body: Result<Json<TransactionFields>, JsonRejection>,
) -> Response {
    let fields = match body {
        Ok(Json(fields)) => fields,
        Err(rejection) => {
            tracing::warn!("could not parse transaction body: {rejection}");
            return Error::InvalidBody(rejection.body_text()).into_response();
        }
    };

    match create_transaction(
        fields,
        &state.local_timezone,
        state.transaction_store.as_ref(),
    ) {
        Ok(transaction) => Json(transaction).into_response(),
        Err(error) => {
            tracing::debug!("could not create transaction: {error}");
            error.into_response()
        }
    }
}
