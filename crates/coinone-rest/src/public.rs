//! Unauthenticated GET requests against the public v2 API

use crate::error::{RestError, RestResult};
use crate::response::{parse_body, ApiResponse, ErrorEnvelope};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use coinone_auth::RequestParams;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Public API base address
pub const PUBLIC_BASE_URL: &str = "https://api.coinone.co.kr/public/v2";

/// Executes public market-data requests
#[derive(Clone)]
pub struct PublicExecutor {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    timeout: Duration,
}

impl PublicExecutor {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `base_url + path` and classify the response
    ///
    /// `path` is already templated with currencies (e.g. `/markets/KRW`).
    #[instrument(skip(self, query))]
    pub async fn execute(&self, path: &str, query: Option<&RequestParams>) -> RestResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let query = query.map(RequestParams::to_query_pairs).unwrap_or_default();

        let request = HttpRequest::get(url)
            .with_query(query)
            .with_header("Accept", "application/json")
            .with_timeout(self.timeout);

        let response = self.transport.send(request).await?;
        debug!(status = response.status, "Public response");

        classify_public(response)
    }
}

impl std::fmt::Debug for PublicExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicExecutor")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Classify a public response
///
/// Rate-limit codes are not distinguished here; they surface as
/// [`RestError::Api`].
pub(crate) fn classify_public(response: HttpResponse) -> RestResult<ApiResponse> {
    if !response.is_success() {
        return Err(RestError::http_status_error(response.status));
    }

    let body = parse_body(&response)?;

    if let Some(envelope) = ErrorEnvelope::from_error_body(&body) {
        return Err(envelope.into_api_error(None));
    }

    Ok(ApiResponse {
        body,
        headers: response.headers,
    })
}
