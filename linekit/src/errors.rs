use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("Parse error: {0}")]
    ParseError(String),

    /// The backend answered with `success: false`.
    #[error("{0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Timeout error: request timed out after {0:?}")]
    TimeoutError(Duration),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for DashError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DashError::ParseError(err.to_string())
        } else if let Some(status) = err.status() {
            DashError::HttpStatus(status.as_u16())
        } else {
            DashError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::ParseError(err.to_string())
    }
}

impl From<anyhow::Error> for DashError {
    fn from(err: anyhow::Error) -> Self {
        DashError::Unknown(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_displays_message_verbatim() {
        let err = DashError::BackendError("No data for shift".to_string());
        assert_eq!(err.to_string(), "No data for shift");
    }

    #[test]
    fn test_json_error_maps_to_parse_error() {
        let err: DashError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, DashError::ParseError(_)));
    }
}
