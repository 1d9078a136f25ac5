//! HTTP request handlers

use super::state::AppState;
use crate::error::{GatewayError, Result};
use crate::results::ResultData;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Query parameters for search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Target token
    pub t: Option<String>,
    /// Search query
    pub q: Option<String>,
    /// Number of hits wanted
    pub n: Option<String>,
}

/// Body of every search response
///
/// Failures still travel with a 200 status; callers check which key is set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResponse {
    Data(ResultData),
    Error(String),
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Json<SearchResponse> {
    let outcome = match params {
        Ok(Query(params)) => run_search(&state, params).await,
        Err(rejection) => Err(GatewayError::validation(rejection.body_text())),
    };

    match outcome {
        Ok(data) => Json(SearchResponse::Data(data)),
        Err(e) => {
            warn!("Search failed: {}", e);
            Json(SearchResponse::Error(e.to_string()))
        }
    }
}

async fn run_search(state: &AppState, params: SearchParams) -> Result<ResultData> {
    let target = params
        .t
        .ok_or_else(|| GatewayError::validation("missing parameter 't'"))?;
    let query = params
        .q
        .ok_or_else(|| GatewayError::validation("missing parameter 'q'"))?;
    let limit = parse_limit(params.n.as_deref())?;

    let silo = state.registry.resolve(&target)?;
    info!("Searching {} for '{}' (n={})", silo.name(), query, limit);

    let result = silo.get_result(&state.client, &query, limit).await?;
    Ok(result.into_data())
}

/// Parse `n` as a positive integer
fn parse_limit(raw: Option<&str>) -> Result<usize> {
    let raw = raw.ok_or_else(|| GatewayError::validation("missing parameter 'n'"))?;
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(GatewayError::validation(format!(
            "parameter 'n' must be a positive integer, got '{}'",
            raw
        ))),
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "targets": state.registry.tokens(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(Some("5")).unwrap(), 5);
        assert_eq!(parse_limit(Some(" 12 ")).unwrap(), 12);
        assert!(parse_limit(Some("0")).is_err());
        assert!(parse_limit(Some("-3")).is_err());
        assert!(parse_limit(Some("five")).is_err());
        assert!(parse_limit(Some("")).is_err());
        assert!(parse_limit(None).is_err());
    }

    #[test]
    fn test_response_shape() {
        let body = serde_json::to_value(SearchResponse::Error("boom".to_string())).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "boom" }));
    }
}
