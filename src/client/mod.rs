//! A client for the transaction API that keeps a local, renderable copy of
//! the transaction list.
//!
//! The list is only ever changed by applying a [ListEvent] to a
//! [TransactionList], so the order in which server responses arrive is the
//! order in which they take effect.

mod api;
mod app;
mod balance;
mod form;
mod state;
mod view;

pub use api::{ApiClient, ClientError};
pub use app::TransactionsApp;
pub use balance::{balance, format_balance};
pub use form::{FormInputs, PriceAndName, parse_price_and_name};
pub use state::{ListEvent, TransactionList, TransactionView, format_display_datetime};
pub use view::transactions_view;
