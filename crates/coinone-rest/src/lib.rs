//! REST API client for the Coinone cryptocurrency exchange
//!
//! This crate wraps Coinone's public v2 market-data API and its signed
//! private v2.1 API.
//!
//! # Features
//!
//! - **Market Data**: Markets, tickers, orderbook, trades, candles
//! - **Account**: Balances
//! - **Trading**: Place orders, cancel all orders for a market
//!
//! # Authentication
//!
//! Private endpoints require an access token and secret key. Each call sends
//! a base64 JSON payload with a fresh UUID nonce, signed with HMAC-SHA512
//! (see `coinone-auth`).
//!
//! # Example
//!
//! ```no_run
//! use coinone_rest::{CoinoneRestClient, Credentials, RestError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CoinoneRestClient::new()?;
//!     let markets = client.market().markets("KRW").await?;
//!     println!("{}", markets.body);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = CoinoneRestClient::with_credentials(creds)?;
//!     match auth_client.get_balance_all().await {
//!         Ok(balance) => println!("{}", balance.body),
//!         Err(RestError::RateLimited { .. }) => println!("slow down"),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate Limiting
//!
//! A private response with `error_code` `"4"` is returned as
//! [`RestError::RateLimited`]. The client never retries; backoff is up to the
//! caller. Public responses with the same code surface as [`RestError::Api`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod private;
pub mod public;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, CoinoneRestClient};
pub use error::{ErrorKind, RestError, RestResult};
pub use private::PrivateExecutor;
pub use public::PublicExecutor;
pub use response::{ApiResponse, RATE_LIMIT_CODE};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{ChartInterval, OrderRequest, OrderSide, OrderType};

pub use coinone_auth::{Credentials, RequestParams};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;
