//! Response envelope handling shared by the public and private executors

use crate::error::{RestError, RestResult};
use crate::transport::HttpResponse;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `error_code` value that signals rate limiting on private calls
pub const RATE_LIMIT_CODE: &str = "4";

pub(crate) const FALLBACK_API_MESSAGE: &str = "API error";
pub(crate) const FALLBACK_RATE_LIMIT_MESSAGE: &str = "rate limit exceeded";
pub(crate) const FALLBACK_HTTP_MESSAGE: &str = "HTTP error";

/// Parsed body and response headers of a successful call
///
/// Headers are kept because rate-limit and pagination information may live
/// there.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Parsed JSON body
    pub body: Value,
    /// All response headers
    pub headers: HeaderMap,
}

impl ApiResponse {
    /// Split into body and headers
    pub fn into_parts(self) -> (Value, HeaderMap) {
        (self.body, self.headers)
    }

    /// Get a header value as text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Deserialize the body into a typed structure
    pub fn json<T: DeserializeOwned>(&self) -> RestResult<T> {
        T::deserialize(&self.body).map_err(|e| RestError::Format {
            message: e.to_string(),
            http_status: None,
        })
    }
}

/// Fields of an error envelope
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ErrorEnvelope {
    pub message: Option<String>,
    pub code: Option<String>,
}

impl ErrorEnvelope {
    /// Read `error_msg`/`error_code` from a JSON object; `None` for non-objects
    pub fn from_object(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        Some(Self {
            message: object.get("error_msg").and_then(value_to_string),
            code: object.get("error_code").and_then(value_to_string),
        })
    }

    /// Envelope of a body flagged with `result: "error"`
    pub fn from_error_body(body: &Value) -> Option<Self> {
        match body.get("result") {
            Some(Value::String(result)) if result == "error" => Self::from_object(body),
            _ => None,
        }
    }

    pub fn is_rate_limit(&self) -> bool {
        self.code.as_deref() == Some(RATE_LIMIT_CODE)
    }

    pub fn into_api_error(self, http_status: Option<u16>) -> RestError {
        RestError::Api {
            message: self.message.unwrap_or_else(|| FALLBACK_API_MESSAGE.to_string()),
            code: self.code,
            http_status,
        }
    }

    pub fn into_rate_limit_error(self, http_status: Option<u16>) -> RestError {
        RestError::RateLimited {
            message: self
                .message
                .unwrap_or_else(|| FALLBACK_RATE_LIMIT_MESSAGE.to_string()),
            code: self.code,
            http_status,
        }
    }
}

/// String form of a scalar: strings verbatim, numbers/bools as JSON text
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parse a response body as JSON
pub(crate) fn parse_body(response: &HttpResponse) -> RestResult<Value> {
    serde_json::from_slice(&response.body).map_err(|e| RestError::Format {
        message: e.to_string(),
        http_status: Some(response.status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_numeric_code_coerced() {
        let envelope =
            ErrorEnvelope::from_error_body(&json!({"result": "error", "error_code": 4})).unwrap();
        assert_eq!(envelope.code.as_deref(), Some("4"));
        assert!(envelope.is_rate_limit());
        assert_eq!(envelope.message, None);
    }

    #[test]
    fn test_success_body_has_no_envelope() {
        assert!(ErrorEnvelope::from_error_body(&json!({"result": "success"})).is_none());
        assert!(ErrorEnvelope::from_error_body(&json!(["error"])).is_none());
        assert!(ErrorEnvelope::from_error_body(&json!("error")).is_none());
    }

    #[test]
    fn test_fallback_messages() {
        let envelope = ErrorEnvelope {
            message: None,
            code: Some("4".into()),
        };
        let err = envelope.clone().into_rate_limit_error(None);
        assert_eq!(err.to_string(), "Rate limit exceeded: rate limit exceeded");

        let err = envelope.into_api_error(Some(400));
        assert_eq!(err.to_string(), "API error: API error");
        assert_eq!(err.http_status(), Some(400));
    }

    #[test]
    fn test_typed_body() {
        #[derive(Deserialize)]
        struct Markets {
            result: String,
        }

        let response = ApiResponse {
            body: json!({"result": "success", "markets": []}),
            headers: HeaderMap::new(),
        };
        let markets: Markets = response.json().unwrap();
        assert_eq!(markets.result, "success");

        let wrong: RestResult<Vec<u8>> = response.json();
        assert!(matches!(wrong, Err(RestError::Format { .. })));
    }
}
