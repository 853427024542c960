//! The local copy of the transaction list and the events that change it.

use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{database_id::TransactionId, timezone::to_local_time, transaction::Transaction};

/// How a date-time is shown to the user, e.g. "May 1, 2024 at 12:00:00 AM".
const DISPLAY_DATETIME_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[month repr:long] [day padding:none], [year] at [hour repr:12 padding:none]:[minute]:[second] [period]"
);

/// A transaction as it is shown in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionView {
    /// The ID assigned by the server, used to delete the transaction.
    pub id: TransactionId,
    /// A short label.
    pub name: String,
    /// A text description.
    pub description: String,
    /// When the transaction happened, formatted for display.
    pub datetime: String,
    /// The signed amount of the transaction.
    pub price: f64,
}

impl TransactionView {
    /// Prepare `transaction` for display in `local_timezone`.
    pub fn new(transaction: Transaction, local_timezone: &str) -> Self {
        Self {
            id: transaction.id,
            name: transaction.name,
            description: transaction.description,
            datetime: format_display_datetime(transaction.datetime, local_timezone),
            price: transaction.price,
        }
    }
}

/// Format `datetime` as wall-clock time in `local_timezone` with a 12-hour clock.
///
/// If `local_timezone` is not a valid timezone the time is shown in the offset
/// it already has.
pub fn format_display_datetime(datetime: OffsetDateTime, local_timezone: &str) -> String {
    let local = to_local_time(datetime, local_timezone).unwrap_or_else(|| {
        tracing::warn!("Invalid timezone {local_timezone}, showing times in their original offset");
        datetime
    });

    local
        .format(DISPLAY_DATETIME_FORMAT)
        .unwrap_or_else(|error| {
            tracing::error!("Could not format date-time {local}: {error}");
            local.to_string()
        })
}

/// Something that happened to the transaction list on the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// The full list was fetched.
    ListLoaded(Vec<TransactionView>),
    /// A transaction was created.
    ItemCreated(TransactionView),
    /// The transaction with this ID was deleted.
    ItemDeleted(TransactionId),
}

/// The transactions in view, in the order the server sent them followed by
/// the order they were created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionList {
    transactions: Vec<TransactionView>,
    is_loaded: bool,
}

impl TransactionList {
    /// Update the list with `event`.
    ///
    /// A loaded list replaces the current contents, a created transaction is
    /// appended and a deleted transaction is removed.
    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::ListLoaded(transactions) => {
                self.transactions = transactions;
                self.is_loaded = true;
            }
            ListEvent::ItemCreated(transaction) => self.transactions.push(transaction),
            ListEvent::ItemDeleted(id) => self.transactions.retain(|transaction| transaction.id != id),
        }
    }

    /// The transactions currently in view.
    pub fn transactions(&self) -> &[TransactionView] {
        &self.transactions
    }

    /// Whether the full list has been fetched at least once.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }
}
