//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::error::RestResult;
use crate::public::PublicExecutor;
use crate::response::ApiResponse;
use crate::types::ChartInterval;
use coinone_auth::RequestParams;
use rust_decimal::Decimal;
use tracing::instrument;

/// Default orderbook depth
pub const DEFAULT_ORDERBOOK_SIZE: u32 = 15;
/// Default number of recent trades
pub const DEFAULT_TRADES_SIZE: u32 = 200;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    executor: &'a PublicExecutor,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(executor: &'a PublicExecutor) -> Self {
        Self { executor }
    }

    /// Get price and quantity tick units for a market
    #[instrument(skip(self))]
    pub async fn range_units(&self, quote_currency: &str, target_currency: &str) -> RestResult<ApiResponse> {
        self.executor
            .execute(&format!("/range_units/{}/{}", quote_currency, target_currency), None)
            .await
    }

    /// List all markets for a quote currency
    #[instrument(skip(self))]
    pub async fn markets(&self, quote_currency: &str) -> RestResult<ApiResponse> {
        self.executor
            .execute(&format!("/markets/{}", quote_currency), None)
            .await
    }

    /// Get a single market
    #[instrument(skip(self))]
    pub async fn market(&self, quote_currency: &str, target_currency: &str) -> RestResult<ApiResponse> {
        self.executor
            .execute(&format!("/market/{}/{}", quote_currency, target_currency), None)
            .await
    }

    /// Get orderbook depth
    ///
    /// # Arguments
    /// * `size` - Number of levels, defaults to 15
    /// * `order_book_unit` - Optional price aggregation unit
    #[instrument(skip(self))]
    pub async fn orderbook(
        &self,
        quote_currency: &str,
        target_currency: &str,
        size: Option<u32>,
        order_book_unit: Option<Decimal>,
    ) -> RestResult<ApiResponse> {
        let query = RequestParams::new()
            .with("size", size.unwrap_or(DEFAULT_ORDERBOOK_SIZE))
            .with_decimal_opt("order_book_unit", order_book_unit);

        self.executor
            .execute(&format!("/orderbook/{}/{}", quote_currency, target_currency), Some(&query))
            .await
    }

    /// Get recent trades
    ///
    /// # Arguments
    /// * `size` - Number of trades, defaults to 200
    #[instrument(skip(self))]
    pub async fn trades(
        &self,
        quote_currency: &str,
        target_currency: &str,
        size: Option<u32>,
    ) -> RestResult<ApiResponse> {
        let query = RequestParams::new().with("size", size.unwrap_or(DEFAULT_TRADES_SIZE));

        self.executor
            .execute(&format!("/trades/{}/{}", quote_currency, target_currency), Some(&query))
            .await
    }

    /// Get tickers for every market of a quote currency
    #[instrument(skip(self))]
    pub async fn tickers(&self, quote_currency: &str, additional_data: bool) -> RestResult<ApiResponse> {
        let query = additional_data_query(additional_data);
        self.executor
            .execute(&format!("/ticker_new/{}", quote_currency), query.as_ref())
            .await
    }

    /// Get the ticker for one market
    #[instrument(skip(self))]
    pub async fn ticker(
        &self,
        quote_currency: &str,
        target_currency: &str,
        additional_data: bool,
    ) -> RestResult<ApiResponse> {
        let query = additional_data_query(additional_data);
        self.executor
            .execute(&format!("/ticker_new/{}/{}", quote_currency, target_currency), query.as_ref())
            .await
    }

    /// Get candles
    ///
    /// # Arguments
    /// * `timestamp` - Optional end time in milliseconds
    /// * `size` - Optional number of candles
    #[instrument(skip(self))]
    pub async fn chart(
        &self,
        quote_currency: &str,
        target_currency: &str,
        interval: ChartInterval,
        timestamp: Option<i64>,
        size: Option<u32>,
    ) -> RestResult<ApiResponse> {
        let query = RequestParams::new()
            .with("interval", interval.as_str())
            .with_opt("timestamp", timestamp)
            .with_opt("size", size);

        self.executor
            .execute(&format!("/chart/{}/{}", quote_currency, target_currency), Some(&query))
            .await
    }
}

fn additional_data_query(additional_data: bool) -> Option<RequestParams> {
    additional_data.then(|| RequestParams::new().with("additional_data", "true"))
}
