//! Result types shared by every silo
//!
//! Defines the envelope a silo fills in and the hit records inside it.

mod format;
mod types;

pub use format::{format_total, Plural};
pub use types::*;
