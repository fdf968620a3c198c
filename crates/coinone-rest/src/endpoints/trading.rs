//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::private::PrivateExecutor;
use crate::response::ApiResponse;
use crate::types::OrderRequest;
use coinone_auth::RequestParams;
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    executor: &'a PrivateExecutor,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(executor: &'a PrivateExecutor) -> Self {
        Self { executor }
    }

    /// Place a new order
    ///
    /// `POST /v2.1/order`. The request is validated locally first; an invalid
    /// order never reaches the network.
    #[instrument(skip(self, order), fields(quote = %order.quote_currency, target = %order.target_currency, side = %order.side, order_type = %order.order_type))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<ApiResponse> {
        order.validate()?;
        debug!("Placing order");
        self.executor.execute("/v2.1/order", &order.to_params()).await
    }

    /// Cancel every open order for one market
    ///
    /// `POST /v2.1/order/cancel/all`
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(
        &self,
        quote_currency: &str,
        target_currency: &str,
    ) -> RestResult<ApiResponse> {
        let params = RequestParams::new()
            .with("quote_currency", quote_currency)
            .with("target_currency", target_currency);

        self.executor.execute("/v2.1/order/cancel/all", &params).await
    }
}
