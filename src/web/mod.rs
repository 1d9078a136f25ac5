//! Web server module
//!
//! Exposes the single search route plus a health check.

mod handlers;
mod routes;
mod state;

pub use handlers::{SearchParams, SearchResponse};
pub use routes::create_router;
pub use state::AppState;
