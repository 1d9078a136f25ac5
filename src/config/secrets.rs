//! Credential store for the upstream APIs
//!
//! Loaded once at start-up and shared read-only by every silo.

use super::SecretsSettings;
use crate::error::ConfigError;
use std::collections::HashMap;
use tracing::debug;

/// Secret names the silos look up
pub const SECRET_KEYS: [&str; 5] = [
    "libguides_key",
    "libguides_siteid",
    "primo_key",
    "primo_vid",
    "primo_host",
];

/// Immutable key-value map of credentials and variant parameters
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    values: HashMap<String, String>,
}

impl Secrets {
    /// Build from an in-memory map
    pub fn from_map<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load from the configured file, then apply environment overrides
    ///
    /// A missing key is not an error here; silos report it when they need it.
    pub fn load(settings: &SecretsSettings) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();

        if let Some(ref path) = settings.file {
            let shown = path.display().to_string();
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: shown.clone(),
                source,
            })?;
            let raw: HashMap<String, String> =
                serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: shown.clone(),
                    source,
                })?;

            for (key, value) in raw {
                values.insert(strip_parameter_path(&key, &settings.parameter_path), value);
            }
            debug!("Read {} secrets from {}", values.len(), shown);
        }

        for key in SECRET_KEYS {
            let var = format!("{}{}", settings.env_prefix, key.to_uppercase());
            if let Ok(value) = std::env::var(&var) {
                values.insert(key.to_string(), value);
            }
        }

        Ok(Self { values })
    }

    /// Look up a secret that must be present
    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.values
            .get(key)
            .map(|v| v.as_str())
            .ok_or_else(|| ConfigError::MissingSecret(key.to_string()))
    }

    /// Names of the known secrets that are not set
    pub fn missing(&self) -> Vec<&'static str> {
        SECRET_KEYS
            .iter()
            .copied()
            .filter(|key| !self.values.contains_key(*key))
            .collect()
    }
}

/// Turn "/searchgate/config/primo_key" into "primo_key"
fn strip_parameter_path(key: &str, parameter_path: &str) -> String {
    let prefix = parameter_path.trim_end_matches('/');
    key.strip_prefix(prefix)
        .map(|rest| rest.trim_start_matches('/'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(key)
        .to_string()
}
