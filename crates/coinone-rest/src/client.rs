//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::private::{PrivateExecutor, PRIVATE_BASE_URL};
use crate::public::{PublicExecutor, PUBLIC_BASE_URL};
use crate::response::ApiResponse;
use crate::transport::{HttpTransport, ReqwestTransport, DEFAULT_TIMEOUT};
use crate::types::OrderRequest;
use coinone_auth::{Credentials, RequestParams};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Coinone REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap and
/// clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use coinone_rest::{CoinoneRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CoinoneRestClient::new()?;
///     let ticker = client.get_ticker("KRW", "BTC").await?;
///     println!("{}", ticker.body);
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = CoinoneRestClient::with_credentials(creds)?;
///     let balance = auth_client.get_balance_all().await?;
///     println!("{}", balance.body);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinoneRestClient {
    public: PublicExecutor,
    private: PrivateExecutor,
}

impl CoinoneRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration and a fresh connection pool
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(config.user_agent.as_deref())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over an existing transport
    ///
    /// Both executors share `transport`; its lifetime is that of the last
    /// clone of the client.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let public = PublicExecutor::new(transport.clone(), config.public_base_url, config.timeout);
        let private = PrivateExecutor::new(
            transport,
            config.private_base_url,
            config.timeout,
            config.credentials,
        );

        info!(has_credentials = private.has_credentials(), "Created Coinone REST client");

        Self { public, private }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.private.has_credentials()
    }

    // ========================================================================
    // Raw executors
    // ========================================================================

    /// GET a public path, e.g. `/markets/KRW`
    pub async fn public_get(&self, path: &str, query: Option<&RequestParams>) -> RestResult<ApiResponse> {
        self.public.execute(path, query).await
    }

    /// Sign and POST to a private path, e.g. `/v2.1/account/balance/all`
    pub async fn private_post(&self, path: &str, params: &RequestParams) -> RestResult<ApiResponse> {
        self.private.execute(path, params).await
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.public)
    }

    /// Get the ticker for one market
    pub async fn get_ticker(&self, quote_currency: &str, target_currency: &str) -> RestResult<ApiResponse> {
        self.market().ticker(quote_currency, target_currency, false).await
    }

    /// Get orderbook depth for one market
    pub async fn get_orderbook(
        &self,
        quote_currency: &str,
        target_currency: &str,
        size: Option<u32>,
    ) -> RestResult<ApiResponse> {
        self.market()
            .orderbook(quote_currency, target_currency, size, None)
            .await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(&self.private))
    }

    /// Get balances for every currency
    pub async fn get_balance_all(&self) -> RestResult<ApiResponse> {
        self.account()?.balance_all().await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(&self.private))
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<ApiResponse> {
        self.trading()?.place_order(order).await
    }

    /// Cancel all open orders for one market
    pub async fn cancel_all_orders(
        &self,
        quote_currency: &str,
        target_currency: &str,
    ) -> RestResult<ApiResponse> {
        self.trading()?
            .cancel_all_orders(quote_currency, target_currency)
            .await
    }

    fn require_credentials(&self) -> RestResult<()> {
        self.private.credentials().map(|_| ())
    }
}

impl std::fmt::Debug for CoinoneRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinoneRestClient")
            .field("public_base_url", &self.public.base_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Public API base address
    pub public_base_url: String,
    /// Private API base address
    pub private_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            public_base_url: PUBLIC_BASE_URL.to_string(),
            private_base_url: PRIVATE_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override both base addresses (e.g., for a proxy or test server)
    pub fn with_base_urls(mut self, public: impl Into<String>, private: impl Into<String>) -> Self {
        self.public_base_url = public.into();
        self.private_base_url = private.into();
        self
    }
}
