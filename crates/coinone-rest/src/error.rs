//! Error types for REST API operations

use crate::transport::TransportError;
use coinone_auth::AuthError;
use std::time::Duration;

/// Coarse classification of a [`RestError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Private call without a complete access token and secret key
    Configuration,
    /// Request rejected by local validation before sending
    InvalidParameter,
    /// Non-success HTTP status without an error body, connection failure or timeout
    Transport,
    /// Successful HTTP status but the body is not JSON
    Format,
    /// Server flagged `result: "error"`
    Api,
    /// Server flagged `result: "error"` with the rate-limit code
    RateLimit,
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Private endpoint called without a complete access token and secret key
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// HTTP exchange failed
    #[error("Transport error: {message}")]
    Transport {
        /// Failure description
        message: String,
        /// HTTP status, if a response was received
        http_status: Option<u16>,
    },

    /// Request timed out
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Body could not be decoded as JSON
    #[error("Invalid JSON response: {message}")]
    Format {
        /// Decoder message
        message: String,
        /// HTTP status of the response
        http_status: Option<u16>,
    },

    /// API returned an error
    #[error("API error: {message}")]
    Api {
        /// `error_msg` from the server
        message: String,
        /// `error_code` from the server, in string form
        code: Option<String>,
        /// HTTP status, when the error came with a non-success status
        http_status: Option<u16>,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {message}")]
    RateLimited {
        /// `error_msg` from the server
        message: String,
        /// `error_code` from the server, in string form
        code: Option<String>,
        /// HTTP status, when the error came with a non-success status
        http_status: Option<u16>,
    },
}

impl RestError {
    /// Transport failure carrying only an HTTP status
    pub fn http_status_error(status: u16) -> Self {
        Self::Transport {
            message: format!("HTTP error: status {}", status),
            http_status: Some(status),
        }
    }

    /// Get the error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::Transport { .. } | Self::Timeout(_) => ErrorKind::Transport,
            Self::Format { .. } => ErrorKind::Format,
            Self::Api { .. } => ErrorKind::Api,
            Self::RateLimited { .. } => ErrorKind::RateLimit,
        }
    }

    /// Server-supplied error code, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } | Self::RateLimited { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status associated with the failure, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Transport { http_status, .. }
            | Self::Format { http_status, .. }
            | Self::Api { http_status, .. }
            | Self::RateLimited { http_status, .. } => *http_status,
            _ => None,
        }
    }

    /// Server-reported error, rate limits included
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::RateLimited { .. })
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Check if this error is worth retrying after a caller-chosen backoff
    pub fn is_retryable(&self) -> bool {
        self.is_rate_limited()
    }
}

impl From<AuthError> for RestError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials | AuthError::EnvVarNotSet(_) => {
                Self::Configuration(err.to_string())
            }
            AuthError::Payload(message) => Self::InvalidParameter(message),
        }
    }
}

impl From<TransportError> for RestError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(after) => Self::Timeout(after),
            other => Self::Transport {
                message: other.to_string(),
                http_status: None,
            },
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_is_api_error() {
        let err = RestError::RateLimited {
            message: "too many requests".into(),
            code: Some("4".into()),
            http_status: None,
        };
        assert!(err.is_api_error());
        assert!(err.is_rate_limited());
        assert!(err.is_retryable());
        assert_eq!(err.kind(), ErrorKind::RateLimit);
        assert_eq!(err.code(), Some("4"));
    }

    #[test]
    fn test_only_rate_limit_retryable() {
        let api = RestError::Api {
            message: "bad param".into(),
            code: Some("100".into()),
            http_status: None,
        };
        assert!(!api.is_retryable());
        assert!(!RestError::Timeout(Duration::from_secs(10)).is_retryable());
        assert!(!RestError::Configuration("missing".into()).is_retryable());
    }

    #[test]
    fn test_http_status_error() {
        let err = RestError::http_status_error(502);
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.http_status(), Some(502));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_from_auth_error() {
        let err: RestError = AuthError::MissingCredentials.into();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err: RestError = AuthError::EnvVarNotSet("COINONE_SECRET_KEY".into()).into();
        assert!(matches!(&err, RestError::Configuration(message) if message.contains("COINONE_SECRET_KEY")));
    }

    #[test]
    fn test_invalid_parameter_kind_distinct_from_configuration() {
        let invalid = RestError::InvalidParameter("qty must be positive".into());
        let missing: RestError = AuthError::MissingCredentials.into();

        assert_eq!(invalid.kind(), ErrorKind::InvalidParameter);
        assert_eq!(missing.kind(), ErrorKind::Configuration);
        assert!(!invalid.is_retryable());
    }

    #[test]
    fn test_timeout_is_transport_kind() {
        let err: RestError = TransportError::Timeout(Duration::from_secs(10)).into();
        assert!(matches!(err, RestError::Timeout(_)));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
