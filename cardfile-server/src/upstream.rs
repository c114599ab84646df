/// Credential-injecting client for the upstream CRM
///
/// This module owns the only two upstream calls the proxy makes:
///
/// - `query_contacts`: relays a structured contact search to the
///   contacts-query endpoint
/// - `orders_for_member`: fetches a member's pricing-plan orders and
///   narrows the list to that member, since the upstream response is not
///   reliably pre-filtered
///
/// Both calls attach the API key as a bearer token and the site id as the
/// `wix-site-id` header. Failures are terminal for the request that raised
/// them; the proxy never retries.

use crate::config::Config;
use cardfile_shared::models::{ContactsPage, OrdersPage};
use cardfile_shared::query::ContactQuery;
use std::time::Duration;

/// Header carrying the site id on every upstream call
pub const SITE_ID_HEADER: &str = "wix-site-id";

/// Upstream error types
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Transport-level failure (connect, TLS, body read, decode)
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status
    #[error("upstream responded with status {status}")]
    Status {
        /// HTTP status code returned by the upstream
        status: u16,
    },
}

/// Upstream result type alias
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// HTTP client for the upstream CRM
#[derive(Debug, Clone)]
pub struct CrmClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    site_id: String,
}

impl CrmClient {
    /// Creates a client from the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(CrmClient {
            http,
            base_url: config.upstream.base_url.trim_end_matches('/').to_string(),
            api_key: config.upstream.api_key.clone(),
            site_id: config.upstream.site_id.clone(),
        })
    }

    /// Relays a contact search to the upstream contacts-query endpoint
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success upstream
    /// status, or an undecodable response body.
    pub async fn query_contacts(&self, query: &ContactQuery) -> UpstreamResult<ContactsPage> {
        let url = format!("{}/contacts/v4/contacts/query", self.base_url);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .header(SITE_ID_HEADER, &self.site_id)
            .json(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Upstream contact query failed");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetches a member's orders, filtered to that member
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success upstream
    /// status, or an undecodable response body.
    pub async fn orders_for_member(&self, member_id: &str) -> UpstreamResult<OrdersPage> {
        let url = format!("{}/pricing-plans/v2/orders", self.base_url);

        let response = self
            .http
            .get(url)
            .query(&[("memberId", member_id)])
            .bearer_auth(&self.api_key)
            .header(SITE_ID_HEADER, &self.site_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                member_id = %member_id,
                "Upstream orders lookup failed"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let mut page: OrdersPage = response.json().await?;
        page.retain_member(member_id);
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, UpstreamConfig};

    fn config(base_url: &str) -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            upstream: UpstreamConfig {
                base_url: base_url.to_string(),
                api_key: "test-key".to_string(),
                site_id: "test-site".to_string(),
            },
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CrmClient::new(&config("https://www.wixapis.com/")).unwrap();
        assert_eq!(client.base_url, "https://www.wixapis.com");
    }

    #[test]
    fn test_status_error_display() {
        let err = UpstreamError::Status { status: 503 };
        assert_eq!(err.to_string(), "upstream responded with status 503");
    }

    // Relay behavior against a live stub upstream is covered in tests/proxy_test.rs
}
