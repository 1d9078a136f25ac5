//! HTTP client for making requests to the upstream search APIs

use crate::config::OutgoingSettings;
use crate::error::Result;
use crate::silos::{SiloRequest, SiloResponse};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with gateway-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> anyhow::Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout)?;
        if timeout.is_zero() {
            anyhow::bail!("request timeout must be positive");
        }
        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(settings.user_agent.clone())
            .gzip(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            timeout,
        })
    }

    /// Execute a silo request
    pub async fn execute(&self, request: SiloRequest) -> Result<SiloResponse> {
        debug!("GET {} ({} params)", request.url, request.params.len());

        let response = self
            .client
            .get(&request.url)
            .timeout(self.timeout)
            .header("Accept", "application/json")
            .query(&request.params)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Configured per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn parse_response(response: Response) -> Result<SiloResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(SiloResponse { status, text, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        for request_timeout in [-1.0, 0.0, f64::NAN] {
            let settings = OutgoingSettings {
                request_timeout,
                ..Default::default()
            };
            assert!(HttpClient::with_settings(&settings).is_err(), "{}", request_timeout);
        }
    }
}
