//! Error types for authentication operations

/// Errors that can occur while preparing an authenticated request
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Access token or secret key is absent or empty
    #[error("access token and secret key are required for private endpoints")]
    MissingCredentials,

    /// Payload could not be serialized or decoded
    #[error("Payload error: {0}")]
    Payload(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
