//! An HTTP client for the transaction API.

use reqwest::{Client as HttpClient, Response, StatusCode};

use crate::{
    database_id::TransactionId,
    endpoints::{self, format_endpoint},
    transaction::{DeleteResponse, Transaction, TransactionFields},
};

/// The errors that may occur when calling the API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("could not reach the server: {0}")]
    Network(#[from] reqwest::Error),

    /// The server responded with a status other than 2xx.
    #[error("the server responded with {status}: {body}")]
    Status {
        /// The status code of the response.
        status: StatusCode,
        /// The body of the response, usually the reason for the failure.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("could not parse the response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Calls the transaction API of a single server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// The server the client talks to unless told otherwise.
    ///
    /// Set at build time with the `EXPENSE_TRACKER_API_URL` environment variable.
    pub const DEFAULT_BASE_URL: &'static str = match option_env!("EXPENSE_TRACKER_API_URL") {
        Some(url) => url,
        None => "http://localhost:4050",
    };

    /// Create a client for the server at [ApiClient::DEFAULT_BASE_URL].
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Create a client for the server at `base_url`, e.g. "http://localhost:4050".
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The server the client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn any non-2xx response into a [ClientError::Status].
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_else(|error| {
                tracing::warn!("Could not read body of {status} response: {error}");
                String::new()
            });
            Err(ClientError::Status { status, body })
        }
    }

    /// GET /api/test
    ///
    /// Returns the confirmation message sent by a running server.
    pub async fn health_check(&self) -> Result<String, ClientError> {
        let response = self
            .http_client
            .get(self.url(endpoints::HEALTH_CHECK))
            .send()
            .await?;

        Ok(Self::check_status(response).await?.json().await?)
    }

    /// GET /api/transaction
    ///
    /// Returns every transaction in the order the server sent them.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let response = self
            .http_client
            .get(self.url(endpoints::TRANSACTIONS_API))
            .send()
            .await?;

        Ok(Self::check_status(response).await?.json().await?)
    }

    /// POST /api/transaction
    ///
    /// Returns the transaction as stored by the server, including its ID.
    pub async fn create_transaction(
        &self,
        fields: &TransactionFields,
    ) -> Result<Transaction, ClientError> {
        let response = self
            .http_client
            .post(self.url(endpoints::TRANSACTIONS_API))
            .json(fields)
            .send()
            .await?;

        Ok(Self::check_status(response).await?.json().await?)
    }

    /// DELETE /api/transaction/{transaction_id}
    ///
    /// The response body is only parsed if the server sent one.
    pub async fn delete_transaction(
        &self,
        id: TransactionId,
    ) -> Result<Option<DeleteResponse>, ClientError> {
        let response = self
            .http_client
            .delete(self.url(&format_endpoint(endpoints::TRANSACTION, id)))
            .send()
            .await?;

        let text = Self::check_status(response).await?.text().await?;

        if text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(serde_json::from_str(&text)?))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
