//! Account endpoints
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::private::PrivateExecutor;
use crate::response::ApiResponse;
use coinone_auth::RequestParams;
use tracing::instrument;

/// Account endpoints
pub struct AccountEndpoints<'a> {
    executor: &'a PrivateExecutor,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(executor: &'a PrivateExecutor) -> Self {
        Self { executor }
    }

    /// Get balances for every currency
    ///
    /// `POST /v2.1/account/balance/all`
    #[instrument(skip(self))]
    pub async fn balance_all(&self) -> RestResult<ApiResponse> {
        self.executor
            .execute("/v2.1/account/balance/all", &RequestParams::new())
            .await
    }
}
