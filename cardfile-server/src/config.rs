/// Configuration management for the proxy server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 3001)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: *)
/// - `UPSTREAM_BASE_URL`: Base URL of the CRM API (default: https://www.wixapis.com)
/// - `WIX_API_KEY`: API key injected as the bearer token (required)
/// - `WIX_SITE_ID`: Site id injected as the `wix-site-id` header (required)
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use cardfile_server::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Upstream CRM configuration
    pub upstream: UpstreamConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins; "*" means permissive
    pub cors_origins: Vec<String>,
}

/// Upstream CRM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the CRM API
    pub base_url: String,

    /// API key sent as the bearer token
    ///
    /// IMPORTANT: This is the secret the whole proxy exists to keep out of
    /// client hands. It is never logged and never relayed downstream.
    pub api_key: String,

    /// Site id sent as the `wix-site-id` header
    pub site_id: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `WIX_API_KEY` or `WIX_SITE_ID` is missing
    /// - `API_PORT` has an invalid value
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| "https://www.wixapis.com".to_string());

        let api_key = env::var("WIX_API_KEY")
            .map_err(|_| anyhow::anyhow!("WIX_API_KEY environment variable is required"))?;

        let site_id = env::var("WIX_SITE_ID")
            .map_err(|_| anyhow::anyhow!("WIX_SITE_ID environment variable is required"))?;

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
            },
            upstream: UpstreamConfig {
                base_url,
                api_key,
                site_id,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
