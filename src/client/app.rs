//! Keeps the transaction list, the form and the server in sync.

use maud::Markup;

use crate::{
    client::{
        ApiClient, ClientError, FormInputs, ListEvent, TransactionList, TransactionView, balance,
        transactions_view,
    },
    database_id::TransactionId,
};

/// The state behind the transactions page and the actions a user can take on it.
///
/// Every change to the list goes through [TransactionsApp::apply], so the list
/// reflects server responses in the order they were received.
#[derive(Debug, Clone)]
pub struct TransactionsApp {
    api: ApiClient,
    local_timezone: String,
    list: TransactionList,
    /// The text currently typed into the form.
    pub form: FormInputs,
}

impl TransactionsApp {
    /// Create an app that talks to `api` and shows times in `local_timezone`,
    /// a canonical timezone name such as "Pacific/Auckland".
    pub fn new(api: ApiClient, local_timezone: &str) -> Self {
        Self {
            api,
            local_timezone: local_timezone.to_owned(),
            list: TransactionList::default(),
            form: FormInputs::default(),
        }
    }

    /// Update the list with `event`.
    pub fn apply(&mut self, event: ListEvent) {
        self.list.apply(event);
    }

    /// Fetch the full list from the server and replace the local list with it.
    ///
    /// # Errors
    /// Returns a [ClientError] if the list could not be fetched, in which case
    /// the local list is left as it was.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let transactions = self.api.list_transactions().await.inspect_err(|error| {
            tracing::warn!("Could not load transactions: {error}");
        })?;

        let views = transactions
            .into_iter()
            .map(|transaction| TransactionView::new(transaction, &self.local_timezone))
            .collect();
        self.apply(ListEvent::ListLoaded(views));

        Ok(())
    }

    /// Submit the form as a new transaction.
    ///
    /// On success the created transaction is appended to the list and the form
    /// is cleared.
    ///
    /// # Errors
    /// Returns a [ClientError] if the server rejected the transaction or could
    /// not be reached. The list and the form are left as they were so the
    /// caller can decide how to tell the user.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let fields = self.form.to_fields();

        let transaction = self.api.create_transaction(&fields).await?;

        self.apply(ListEvent::ItemCreated(TransactionView::new(
            transaction,
            &self.local_timezone,
        )));
        self.form.clear();

        Ok(())
    }

    /// Delete the transaction with `id` on the server, then remove it from the list.
    ///
    /// # Errors
    /// Returns a [ClientError] if the server did not confirm the delete. The
    /// error is logged and the list is left as it was.
    pub async fn delete(&mut self, id: TransactionId) -> Result<(), ClientError> {
        if let Err(error) = self.api.delete_transaction(id).await {
            tracing::error!("Could not delete transaction {id}: {error}");
            return Err(error);
        }

        self.apply(ListEvent::ItemDeleted(id));

        Ok(())
    }

    /// The transactions currently in view.
    pub fn transactions(&self) -> &[TransactionView] {
        self.list.transactions()
    }

    /// Whether the full list has been fetched at least once.
    pub fn is_loaded(&self) -> bool {
        self.list.is_loaded()
    }

    /// The sum of the prices of the transactions in view.
    pub fn balance(&self) -> f64 {
        balance(self.list.transactions())
    }

    /// Render the page for the current state.
    pub fn render(&self) -> Markup {
        transactions_view(self.list.transactions(), &self.form)
    }
}
