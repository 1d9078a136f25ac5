//! Application state shared across handlers

use crate::config::{Secrets, Settings};
use crate::network::HttpClient;
use crate::silos::SiloRegistry;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Silo registry
    pub registry: Arc<SiloRegistry>,
    /// Outbound HTTP client
    pub client: HttpClient,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, secrets: Secrets) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        let registry = SiloRegistry::load(&settings, Arc::new(secrets));

        Ok(Self::with_parts(settings, registry, client))
    }

    /// Assemble state from already-built parts
    pub fn with_parts(settings: Settings, registry: SiloRegistry, client: HttpClient) -> Self {
        Self {
            settings: Arc::new(settings),
            registry: Arc::new(registry),
            client,
        }
    }
}
