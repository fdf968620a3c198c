//! Signed payload construction

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{Map, Value};

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};
use crate::params::RequestParams;

const ACCESS_TOKEN_KEY: &str = "access_token";
const NONCE_KEY: &str = "nonce";

/// Build the base64 payload text for one request
///
/// Copies `params`, sets `access_token` and `nonce` (in place if the keys
/// already exist, appended otherwise), serializes to compact JSON with
/// non-ASCII left unescaped, and base64-encodes the UTF-8 bytes.
pub fn encode_payload(params: &RequestParams, access_token: &str, nonce: &str) -> AuthResult<String> {
    let mut body = params.as_map().clone();
    body.insert(ACCESS_TOKEN_KEY.to_string(), Value::String(access_token.to_string()));
    body.insert(NONCE_KEY.to_string(), Value::String(nonce.to_string()));

    let json = serde_json::to_string(&body).map_err(|e| AuthError::Payload(e.to_string()))?;
    Ok(BASE64.encode(json.as_bytes()))
}

/// Decode payload text back into its JSON object
pub fn decode_payload(payload: &str) -> AuthResult<Map<String, Value>> {
    let bytes = BASE64
        .decode(payload)
        .map_err(|e| AuthError::Payload(format!("invalid base64: {}", e)))?;

    serde_json::from_slice(&bytes).map_err(|e| AuthError::Payload(format!("invalid JSON: {}", e)))
}

/// Payload and signature for a single private request
///
/// Created per call and dropped with it. `Debug` never prints either value.
#[derive(Clone)]
pub struct SignedPayload {
    nonce: String,
    payload: String,
    signature: String,
}

impl SignedPayload {
    /// Nonce embedded in the payload
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Base64 payload text (request body and `X-COINONE-PAYLOAD`)
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Lowercase hex signature (`X-COINONE-SIGNATURE`)
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl std::fmt::Debug for SignedPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedPayload")
            .field("payload_len", &self.payload.len())
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Request signer for building authenticated payloads
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer with a fresh nonce
    ///
    /// Fails with [`AuthError::MissingCredentials`] if either credential is empty.
    pub fn new(credentials: &'a Credentials) -> AuthResult<Self> {
        Self::with_nonce(credentials, Credentials::generate_nonce())
    }

    /// Create a signer with a caller-chosen nonce
    ///
    /// The nonce must never be reused across requests.
    pub fn with_nonce(credentials: &'a Credentials, nonce: impl Into<String>) -> AuthResult<Self> {
        credentials.ensure_complete()?;
        Ok(Self {
            credentials,
            nonce: nonce.into(),
        })
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Encode `params` and sign the resulting payload text
    pub fn sign_params(&self, params: &RequestParams) -> AuthResult<SignedPayload> {
        let payload = encode_payload(params, self.credentials.access_token(), &self.nonce)?;
        let signature = self.credentials.sign(payload.as_bytes());

        Ok(SignedPayload {
            nonce: self.nonce.clone(),
            payload,
            signature,
        })
    }
}
