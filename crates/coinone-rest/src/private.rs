//! Signed POST requests against the private v2.1 API

use crate::error::{RestError, RestResult};
use crate::response::{parse_body, ApiResponse, ErrorEnvelope, FALLBACK_HTTP_MESSAGE};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use coinone_auth::{AuthError, Credentials, RequestParams, RequestSigner};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Private API base address
pub const PRIVATE_BASE_URL: &str = "https://api.coinone.co.kr";

/// Header carrying the base64 payload
pub const PAYLOAD_HEADER: &str = "X-COINONE-PAYLOAD";
/// Header carrying the hex HMAC-SHA512 signature
pub const SIGNATURE_HEADER: &str = "X-COINONE-SIGNATURE";

/// Signs and executes private requests
///
/// One round trip per call: no retry, no backoff, no caching. A
/// [`RestError::RateLimited`] is returned for the caller's backoff policy.
#[derive(Clone)]
pub struct PrivateExecutor {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    timeout: Duration,
    credentials: Option<Credentials>,
}

impl PrivateExecutor {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        timeout: Duration,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            credentials,
        }
    }

    /// Both credential fields are present and non-empty
    pub fn has_credentials(&self) -> bool {
        self.credentials.as_ref().is_some_and(Credentials::is_complete)
    }

    /// Complete credentials, or a configuration error
    pub fn credentials(&self) -> RestResult<&Credentials> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(AuthError::MissingCredentials)?;
        credentials.ensure_complete()?;
        Ok(credentials)
    }

    /// Sign `params` and POST them to `base_url + path`
    ///
    /// Fails with [`RestError::Configuration`] before any network activity if
    /// credentials are incomplete.
    #[instrument(skip(self, params))]
    pub async fn execute(&self, path: &str, params: &RequestParams) -> RestResult<ApiResponse> {
        let credentials = self.credentials()?;
        let signed = RequestSigner::new(credentials)?.sign_params(params)?;

        let url = format!("{}{}", self.base_url, path);
        let request = HttpRequest::post(url)
            .with_header("Content-type", "application/json")
            .with_header(PAYLOAD_HEADER, signed.payload())
            .with_header(SIGNATURE_HEADER, signed.signature())
            .with_body(signed.payload().as_bytes().to_vec())
            .with_timeout(self.timeout);

        debug!(param_count = params.len(), "Making authenticated request");

        let response = self.transport.send(request).await?;
        let result = classify_private(response);

        match &result {
            Ok(_) => debug!("Private request succeeded"),
            Err(err) => debug!(kind = ?err.kind(), code = ?err.code(), "Private request failed"),
        }

        result
    }
}

impl std::fmt::Debug for PrivateExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateExecutor")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Classify a private response
///
/// Order matters: HTTP status first, then JSON decoding, then the
/// `result: "error"` envelope with the rate-limit code split out.
pub(crate) fn classify_private(response: HttpResponse) -> RestResult<ApiResponse> {
    let status = response.status;

    if !response.is_success() {
        let envelope = serde_json::from_slice::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|body| ErrorEnvelope::from_object(&body));

        return Err(match envelope {
            Some(envelope) => RestError::Api {
                message: envelope
                    .message
                    .unwrap_or_else(|| FALLBACK_HTTP_MESSAGE.to_string()),
                code: envelope.code,
                http_status: Some(status),
            },
            None => RestError::http_status_error(status),
        });
    }

    let body = parse_body(&response)?;

    if let Some(envelope) = ErrorEnvelope::from_error_body(&body) {
        return Err(if envelope.is_rate_limit() {
            envelope.into_rate_limit_error(None)
        } else {
            envelope.into_api_error(None)
        });
    }

    Ok(ApiResponse {
        body,
        headers: response.headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::transport::{HttpMethod, MockTransport, TransportError};
    use coinone_auth::decode_payload;

    fn executor(transport: Arc<MockTransport>, credentials: Option<Credentials>) -> PrivateExecutor {
        PrivateExecutor::new(transport, PRIVATE_BASE_URL, Duration::from_secs(10), credentials)
    }

    fn creds() -> Credentials {
        Credentials::new("test-access-token", "test-secret-key")
    }

    #[tokio::test]
    async fn test_missing_credentials_makes_no_call() {
        let transport = Arc::new(MockTransport::new());
        transport.push_body(200, r#"{"result":"success"}"#);

        let cases = [
            None,
            Some(Credentials::new("", "secret")),
            Some(Credentials::new("token", "")),
        ];
        for credentials in cases {
            let err = executor(transport.clone(), credentials)
                .execute("/v2.1/account/balance/all", &RequestParams::new())
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }

        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_signed_request_shape() {
        let transport = Arc::new(MockTransport::new());
        transport.push_body(200, r#"{"result":"success","balances":[]}"#);

        let credentials = creds();
        let params = RequestParams::new()
            .with("quote_currency", "KRW")
            .with("target_currency", "BTC");
        let response = executor(transport.clone(), Some(credentials.clone()))
            .execute("/v2.1/order/cancel/all", &params)
            .await
            .unwrap();
        assert_eq!(response.body["result"], "success");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.coinone.co.kr/v2.1/order/cancel/all");
        assert_eq!(request.header("Content-type"), Some("application/json"));
        assert_eq!(request.timeout, Duration::from_secs(10));

        let payload = request.header(PAYLOAD_HEADER).unwrap();
        let signature = request.header(SIGNATURE_HEADER).unwrap();
        assert_eq!(request.body.as_deref(), Some(payload.as_bytes()));
        assert_eq!(signature, credentials.sign(payload.as_bytes()));

        let decoded = decode_payload(payload).unwrap();
        assert_eq!(decoded["quote_currency"], "KRW");
        assert_eq!(decoded["target_currency"], "BTC");
        assert_eq!(decoded["access_token"], "test-access-token");
        assert!(decoded["nonce"].is_string());
    }

    #[tokio::test]
    async fn test_identical_calls_use_fresh_nonces() {
        let transport = Arc::new(MockTransport::new());
        transport.push_body(200, "{}");
        transport.push_body(200, "{}");

        let executor = executor(transport.clone(), Some(creds()));
        let params = RequestParams::new().with("quote_currency", "KRW");
        executor.execute("/v2.1/order", &params).await.unwrap();
        executor.execute("/v2.1/order", &params).await.unwrap();

        let requests = transport.requests();
        assert_ne!(requests[0].header(PAYLOAD_HEADER), requests[1].header(PAYLOAD_HEADER));
        assert_ne!(requests[0].header(SIGNATURE_HEADER), requests[1].header(SIGNATURE_HEADER));
    }

    #[tokio::test]
    async fn test_timeout_leaves_executor_usable() {
        let transport = Arc::new(MockTransport::new());
        transport.push_error(TransportError::Timeout(Duration::from_secs(10)));
        transport.push_body(200, r#"{"result":"success"}"#);

        let executor = executor(transport.clone(), Some(creds()));
        let err = executor
            .execute("/v2.1/account/balance/all", &RequestParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, RestError::Timeout(_)));
        assert_eq!(err.kind(), ErrorKind::Transport);

        assert!(executor
            .execute("/v2.1/account/balance/all", &RequestParams::new())
            .await
            .is_ok());
    }

    #[test]
    fn test_rate_limit_classified() {
        let err = classify_private(HttpResponse::new(
            200,
            r#"{"result":"error","error_code":"4","error_msg":"rate limit"}"#,
        ))
        .unwrap_err();

        assert!(matches!(&err, RestError::RateLimited { message, .. } if message == "rate limit"));
        assert_eq!(err.code(), Some("4"));
        assert!(err.is_api_error());
    }

    #[test]
    fn test_numeric_rate_limit_code_classified() {
        let err = classify_private(HttpResponse::new(200, r#"{"result":"error","error_code":4}"#))
            .unwrap_err();
        assert!(err.is_rate_limited());
        assert_eq!(err.to_string(), "Rate limit exceeded: rate limit exceeded");
    }

    #[test]
    fn test_other_code_is_api_error() {
        let err = classify_private(HttpResponse::new(
            200,
            r#"{"result":"error","error_code":"100","error_msg":"bad param"}"#,
        ))
        .unwrap_err();

        assert!(matches!(&err, RestError::Api { message, .. } if message == "bad param"));
        assert_eq!(err.code(), Some("100"));
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_server_error_without_body() {
        let err = classify_private(HttpResponse::new(500, "Internal Server Error")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.http_status(), Some(500));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_error_status_with_json_body() {
        let err = classify_private(HttpResponse::new(
            401,
            r#"{"result":"error","error_code":"12","error_msg":"Invalid signature"}"#,
        ))
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.code(), Some("12"));
        assert_eq!(err.http_status(), Some(401));
        assert_eq!(err.to_string(), "API error: Invalid signature");
    }

    #[test]
    fn test_success_status_with_non_json_body() {
        let err = classify_private(HttpResponse::new(200, "not json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_success_keeps_headers() {
        use reqwest::header::{HeaderName, HeaderValue};

        let response = classify_private(
            HttpResponse::new(200, r#"{"result":"success"}"#).with_header(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from_static("42"),
            ),
        )
        .unwrap();

        assert_eq!(response.header("x-ratelimit-remaining"), Some("42"));
    }
}
