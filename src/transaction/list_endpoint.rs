//! Defines the endpoint for listing all transactions.
use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, stores::TransactionStore, transaction::list_transactions};

/// The state needed to list transactions.
#[derive(Clone)]
pub struct ListTransactionsState {
    /// The store for managing transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler that responds with every transaction as a JSON array.
pub async fn list_transactions_endpoint(State(state): State<ListTransactionsState>) -> Response {
    match list_transactions(state.transaction_store.as_ref()) {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_response(),
    }
}
