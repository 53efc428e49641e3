//! Error types for the status API

use std::fmt;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, StatusError>;

#[derive(Debug)]
pub enum StatusError {
    /// IO operation failed
    Io(std::io::Error),

    /// HTTP request to an upstream status endpoint failed
    Http(reqwest::Error),

    /// JSON serialization/deserialization failed
    Json(serde_json::Error),

    /// Upstream did not answer within the configured timeout
    Timeout(Duration),

    /// Upstream answered with a non-success status code
    Upstream { status: u16, url: String },

    /// Configuration error
    Config(String),
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusError::Io(err) => write!(f, "IO error: {}", err),
            StatusError::Http(err) => write!(f, "HTTP error: {}", err),
            StatusError::Json(err) => write!(f, "JSON error: {}", err),
            StatusError::Timeout(limit) => {
                write!(f, "Upstream timed out after {}ms", limit.as_millis())
            }
            StatusError::Upstream { status, url } => {
                write!(f, "Upstream {} returned status {}", url, status)
            }
            StatusError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for StatusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusError::Io(err) => Some(err),
            StatusError::Http(err) => Some(err),
            StatusError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StatusError {
    fn from(err: std::io::Error) -> Self {
        StatusError::Io(err)
    }
}

impl From<reqwest::Error> for StatusError {
    fn from(err: reqwest::Error) -> Self {
        StatusError::Http(err)
    }
}

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        StatusError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = StatusError::Upstream {
            status: 503,
            url: "https://status.example.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream https://status.example.com returned status 503"
        );

        let err = StatusError::Timeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "Upstream timed out after 5000ms");

        let err = StatusError::Config("port must be greater than 0".to_string());
        assert_eq!(err.to_string(), "Configuration error: port must be greater than 0");
    }

    #[test]
    fn test_json_error_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StatusError::from(parse_err);

        assert!(matches!(err, StatusError::Json(_)));
        assert!(err.source().is_some());
    }
}
