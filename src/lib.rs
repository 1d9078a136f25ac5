//! Searchgate: one search endpoint in front of several library backends
//!
//! A request names a target silo, the silo queries its upstream API, and the
//! response is normalized into a single result shape.

pub mod config;
pub mod error;
pub mod network;
pub mod results;
pub mod silos;
pub mod web;

pub use config::{Secrets, Settings};
pub use error::{ConfigError, GatewayError};
pub use results::{Hit, Icon, SearchResult};
pub use silos::{Silo, SiloRegistry, Target};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
