//! Search silo module
//!
//! Defines the Silo trait, the backend adapters, and the registry that maps
//! target tokens onto them.

mod registry;
mod target;
mod traits;

// Silo implementations
pub mod libguides;
pub mod primo;

pub use registry::SiloRegistry;
pub use target::{ReservedTarget, Target, UnknownTarget};
pub use traits::*;
