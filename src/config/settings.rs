//! Settings structures for the gateway

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub upstream: UpstreamSettings,
    pub secrets: SecretsSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SEARCHGATE_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SEARCHGATE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SEARCHGATE_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SEARCHGATE_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse::<f64>() {
                if is_valid_timeout(timeout) {
                    self.outgoing.request_timeout = timeout;
                }
            }
        }
        if let Ok(val) = std::env::var("SEARCHGATE_SECRETS_FILE") {
            self.secrets.file = Some(PathBuf::from(val));
        }
    }

    /// Reject values the HTTP client cannot be built with
    pub fn validate(&self) -> Result<()> {
        if !is_valid_timeout(self.outgoing.request_timeout) {
            anyhow::bail!(
                "outgoing.request_timeout must be a positive number of seconds, got {}",
                self.outgoing.request_timeout
            );
        }
        Ok(())
    }
}

fn is_valid_timeout(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// User agent sent upstream
    pub user_agent: String,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 20,
            verify_ssl: true,
            user_agent: format!("searchgate/{}", crate::VERSION),
        }
    }
}

/// Upstream endpoints and page templates
///
/// `{query}` in `libguides_full_url` is replaced by the escaped query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    pub libguides_api_url: String,
    pub libguides_full_url: String,
    pub primo_api_url: String,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            libguides_api_url: "http://lgapi.libapps.com/1.1/guides".to_string(),
            libguides_full_url: "http://guides.ou.edu/srch.php?q={query}&t=0".to_string(),
            primo_api_url: "https://api-na.hosted.exlibrisgroup.com/primo/v1/search"
                .to_string(),
        }
    }
}

/// Where secrets come from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsSettings {
    /// Optional YAML map of secret name to value
    pub file: Option<PathBuf>,
    /// Parameter path prefix stripped from keys in the file
    pub parameter_path: String,
    /// Prefix for environment variable overrides
    pub env_prefix: String,
}

impl Default for SecretsSettings {
    fn default() -> Self {
        Self {
            file: None,
            parameter_path: "/searchgate/config".to_string(),
            env_prefix: "SEARCHGATE_".to_string(),
        }
    }
}
