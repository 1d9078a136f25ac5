//! HTTP networking module
//!
//! Provides the outbound client used by every silo.

mod client;

pub use client::HttpClient;
