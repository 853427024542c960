//! Expense Tracker is a small app for recording income and expenses and
//! keeping an eye on the running balance.
//!
//! This library provides a JSON REST API over a store of transactions, and a
//! client that keeps a local copy of the transaction list in sync with that
//! API and renders it with the balance.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
pub mod client;
mod database_id;
mod db;
pub mod endpoints;
mod health;
mod html;
mod logging;
mod routing;
pub mod stores;
mod timezone;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::TransactionId;
pub use db::initialize as initialize_db;
pub use health::{HEALTH_CHECK_MESSAGE, health_check};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// The message sent to the client when a transaction is missing a field.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
/// The message sent to the client for any fault it cannot fix itself.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One of the fields needed to create a transaction is absent or empty.
    ///
    /// The client should fill in every field and try again.
    #[error("missing required fields")]
    MissingFields,

    /// A field needed to create a transaction is present but cannot be
    /// interpreted, e.g. a price that is not a number.
    #[error("invalid value for field \"{0}\"")]
    InvalidField(&'static str),

    /// The request body could not be read as JSON.
    #[error("could not parse request body: {0}")]
    InvalidBody(String),

    /// The path segment could not be interpreted as a transaction ID.
    #[error("\"{0}\" is not a valid transaction ID")]
    InvalidTransactionId(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MissingFields => {
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE).into_response()
            }
            Error::InvalidField(_) | Error::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE,
                )
                    .into_response()
            }
        }
    }
}
