//! Authentication for Coinone's private REST API (v2.1)
//!
//! Every private call carries a base64-encoded JSON payload and an
//! HMAC-SHA512 signature of that exact payload text:
//!
//! 1. The request parameters are copied and `access_token` and a fresh
//!    UUIDv4 `nonce` are injected.
//! 2. The result is serialized to compact JSON in insertion order.
//! 3. The JSON text is base64-encoded; this is the `X-COINONE-PAYLOAD` header
//!    and the request body.
//! 4. The payload text is signed with the secret key; the lowercase hex
//!    digest is the `X-COINONE-SIGNATURE` header.
//!
//! # Example
//!
//! ```no_run
//! use coinone_auth::{Credentials, RequestParams, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let params = RequestParams::new()
//!         .with("quote_currency", "KRW")
//!         .with("target_currency", "BTC");
//!
//!     let signed = RequestSigner::new(&creds)?.sign_params(&params)?;
//!     println!("signature has {} hex chars", signed.signature().len());
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod params;
mod payload;

pub use credentials::{Credentials, ACCESS_TOKEN_ENV, SECRET_KEY_ENV};
pub use error::{AuthError, AuthResult};
pub use params::RequestParams;
pub use payload::{decode_payload, encode_payload, RequestSigner, SignedPayload};
