/// Proxy API client
///
/// This module defines the contract to the search collaborator (the
/// Cardfile proxy) and its HTTP implementation. The orchestrator only
/// ever sees the `Directory` trait, so tests substitute a scripted
/// implementation and drive every failure mode without a network.
///
/// Both operations are terminal on failure: no retries anywhere.

use async_trait::async_trait;
use cardfile_shared::models::{Contact, ContactsPage, Order, OrdersPage};
use cardfile_shared::query::ContactQuery;
use serde::Deserialize;

/// Client error types
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connect, body read, decode)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The proxy answered with a non-success status
    #[error("server responded with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the proxy's error payload, or the status text
        message: String,
    },
}

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Contract to the search collaborator
///
/// The two calls the client makes: a contact search and an
/// orders-by-member lookup. Server-side filtering of orders is the
/// collaborator's responsibility.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Runs a structured contact search
    async fn search(&self, query: &ContactQuery) -> ClientResult<Vec<Contact>>;

    /// Fetches the orders of one member
    async fn orders_for_member(&self, member_id: &str) -> ClientResult<Vec<Order>>;
}

/// HTTP implementation of `Directory` against the Cardfile proxy
#[derive(Debug, Clone)]
pub struct ApiDirectory {
    http: reqwest::Client,
    base_url: String,
}

/// Error payload shape the proxy produces
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiDirectory {
    /// Creates a client for the proxy at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(ApiDirectory {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Extracts the error message from a non-success response
    async fn api_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
        };

        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl Directory for ApiDirectory {
    async fn search(&self, query: &ContactQuery) -> ClientResult<Vec<Contact>> {
        let url = format!("{}/api/contacts/query", self.base_url);

        let response = self.http.post(url).json(query).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let page: ContactsPage = response.json().await?;
        Ok(page.contacts)
    }

    async fn orders_for_member(&self, member_id: &str) -> ClientResult<Vec<Order>> {
        let url = format!("{}/api/orders/member/{}", self.base_url, member_id);

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let page: OrdersPage = response.json().await?;
        Ok(page.orders)
    }
}
