//! API credentials for Coinone's private endpoints
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the access token
pub const ACCESS_TOKEN_ENV: &str = "COINONE_ACCESS_TOKEN";
/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "COINONE_SECRET_KEY";

/// Access token and secret key for signed requests
///
/// Both values are opaque strings issued by Coinone. The secret key is used
/// as raw UTF-8 bytes for HMAC; it is never decoded.
pub struct Credentials {
    access_token: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials from an access token and secret key
    ///
    /// Empty values are accepted here; private calls reject them with
    /// [`AuthError::MissingCredentials`] before anything is sent.
    pub fn new(access_token: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINONE_ACCESS_TOKEN` and `COINONE_SECRET_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let access_token = std::env::var(ACCESS_TOKEN_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(ACCESS_TOKEN_ENV.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_KEY_ENV.to_string()))?;

        Ok(Self::new(access_token, secret_key))
    }

    /// Get the access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Both the access token and the secret key are non-empty
    pub fn is_complete(&self) -> bool {
        !self.access_token.is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Fail with [`AuthError::MissingCredentials`] unless both fields are set
    pub fn ensure_complete(&self) -> AuthResult<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(AuthError::MissingCredentials)
        }
    }

    /// Sign an encoded payload
    ///
    /// Returns the lowercase hex HMAC-SHA512 of `encoded_payload`, keyed by the
    /// secret key bytes. Pure function of (key, bytes).
    pub fn sign(&self, encoded_payload: &[u8]) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret_key.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(encoded_payload);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Generate a nonce for one request
    ///
    /// A random UUIDv4 in hyphenated lowercase form. The generator is
    /// OS-seeded and thread safe, so concurrent calls never share a nonce.
    pub fn generate_nonce() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            access_token: self.access_token.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.access_token.chars().take(4).collect();
        f.debug_struct("Credentials")
            .field("access_token", &format!("{}...", prefix))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
