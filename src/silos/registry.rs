//! Silo registry for resolving target tokens

use super::libguides::LibGuides;
use super::primo::Primo;
use super::target::{Target, UnknownTarget};
use super::traits::Silo;
use crate::config::{Secrets, Settings};
use crate::error::{GatewayError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Registry of all available silos, keyed by target
pub struct SiloRegistry {
    silos: HashMap<Target, Arc<dyn Silo>>,
}

impl SiloRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            silos: HashMap::new(),
        }
    }

    /// Build every implemented silo from settings and the shared secrets
    pub fn load(settings: &Settings, secrets: Arc<Secrets>) -> Self {
        let mut registry = Self::new();

        for target in Target::IMPLEMENTED {
            let silo: Arc<dyn Silo> = match target {
                Target::LibGuides => Arc::new(LibGuides::new(&settings.upstream, secrets.clone())),
                Target::Primo(variant) => {
                    Arc::new(Primo::new(variant, &settings.upstream, secrets.clone()))
                }
                Target::Unimplemented(_) => continue,
            };
            info!("Loaded silo: {} ({})", target, silo.top_label());
            registry.register(target, silo);
        }

        let missing = secrets.missing();
        if !missing.is_empty() {
            warn!("Secrets not set: {}", missing.join(", "));
        }

        registry
    }

    /// Register a silo for a target
    pub fn register(&mut self, target: Target, silo: Arc<dyn Silo>) {
        self.silos.insert(target, silo);
    }

    /// Get a silo by parsed target
    pub fn get(&self, target: Target) -> Option<&Arc<dyn Silo>> {
        self.silos.get(&target)
    }

    /// Resolve a raw target token to its silo
    pub fn resolve(&self, token: &str) -> Result<Arc<dyn Silo>> {
        let target: Target = token
            .parse()
            .map_err(|UnknownTarget(t)| GatewayError::UnknownTarget(t))?;

        match target {
            Target::Unimplemented(reserved) => {
                Err(GatewayError::Unimplemented(reserved.token().to_string()))
            }
            _ => self
                .get(target)
                .cloned()
                .ok_or_else(|| GatewayError::Unimplemented(target.token().to_string())),
        }
    }

    /// Get all registered target tokens
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<_> = self.silos.keys().map(|t| t.token()).collect();
        tokens.sort_unstable();
        tokens
    }

    /// Get number of registered silos
    pub fn len(&self) -> usize {
        self.silos.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.silos.is_empty()
    }
}

impl Default for SiloRegistry {
    fn default() -> Self {
        Self::new()
    }
}
