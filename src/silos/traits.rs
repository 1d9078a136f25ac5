//! Silo traits and types

use crate::error::{GatewayError, Result};
use crate::network::HttpClient;
use crate::results::SearchResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Parameters for one search against a silo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    /// Search query string, passed through untouched
    pub query: String,
    /// Maximum number of hits to return
    pub limit: usize,
}

impl RequestParams {
    /// Create request parameters; `limit` must be at least 1
    pub fn new(query: impl Into<String>, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(GatewayError::validation(
                "result limit must be a positive integer",
            ));
        }
        Ok(Self {
            query: query.into(),
            limit,
        })
    }
}

/// Outbound GET request built by a silo
#[derive(Debug, Clone)]
pub struct SiloRequest {
    /// URL to request
    pub url: String,
    /// Query parameters, in order
    pub params: Vec<(String, String)>,
}

impl SiloRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// First value of a query parameter
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.get_param(key).is_some()
    }
}

/// HTTP response handed back to a silo
#[derive(Debug)]
pub struct SiloResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl SiloResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse a successful response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.is_success() {
            return Err(GatewayError::upstream(format!(
                "HTTP error {} from {}",
                self.status, self.url
            )));
        }
        Ok(serde_json::from_str(&self.text)?)
    }
}

/// A backend-specific search adapter
#[async_trait]
pub trait Silo: Send + Sync {
    /// Source tag reported in results
    fn name(&self) -> &str;

    /// Category label shown above the hits
    fn top_label(&self) -> &str;

    /// Build the upstream request for a search
    fn request(&self, params: &RequestParams) -> Result<SiloRequest>;

    /// Map the upstream response into a result envelope
    fn response(&self, params: &RequestParams, response: SiloResponse) -> Result<SearchResult>;

    /// Run a full search: build the request, call upstream, map the response
    async fn get_result(
        &self,
        client: &HttpClient,
        query: &str,
        limit: usize,
    ) -> Result<SearchResult> {
        let params = RequestParams::new(query, limit)?;
        let request = self.request(&params)?;
        let response = client.execute(request).await?;
        debug!("{} answered with status {}", self.name(), response.status);
        self.response(&params, response)
    }
}

/// Join a list-valued upstream field the way hits display it
pub fn join_values(values: &[String]) -> String {
    values.join("; ")
}
