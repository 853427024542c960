//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionFields` that are validated to create one
//! - The service functions for creating, listing and deleting transactions
//! - The route handlers that expose those functions over HTTP

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod service;

pub use core::{
    NewTransaction, PriceInput, Transaction, TransactionFields, create_transaction_table,
    map_transaction_row,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::{
    DELETE_FAILED_MESSAGE, DELETE_SUCCESS_MESSAGE, DeleteErrorResponse, DeleteResponse,
    delete_transaction_endpoint,
};
pub use list_endpoint::list_transactions_endpoint;
pub use service::{create_transaction, delete_transaction, list_transactions};
