//! Error taxonomy for the gateway
//!
//! Every failure a request can hit ends up as one of these variants. The web
//! handler is the only place that turns them into a response body.

use thiserror::Error;

/// Errors raised while loading settings or reading secrets
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required secret: {0}")]
    MissingSecret(String),

    #[error("failed to read secrets file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse secrets file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors surfaced by a gateway request
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("ValidationError: {0}")]
    Validation(String),

    #[error("UnknownTargetError: unknown search target '{0}'")]
    UnknownTarget(String),

    #[error("UnknownTargetError: no adapter available for target '{0}'")]
    Unimplemented(String),

    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),

    #[error("UpstreamError: {0}")]
    Upstream(String),
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Upstream(format!("request timed out: {}", err))
        } else {
            Self::Upstream(format!("request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Upstream(format!("failed to parse response: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: GatewayError = ConfigError::MissingSecret("primo_key".to_string()).into();
        assert!(matches!(err, GatewayError::Config(_)));
        assert_eq!(
            err.to_string(),
            "ConfigError: missing required secret: primo_key"
        );
    }

    #[test]
    fn test_unknown_and_unimplemented_are_distinct() {
        let unknown = GatewayError::UnknownTarget("bogus".to_string()).to_string();
        let reserved = GatewayError::Unimplemented("site".to_string()).to_string();
        assert!(unknown.contains("unknown search target"));
        assert!(reserved.contains("no adapter available"));
    }
}
