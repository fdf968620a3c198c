//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use coinone_rest::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use coinone_rest::{ClientConfig, CoinoneRestClient, Credentials};
use parking_lot::Mutex;
use std::sync::Arc;

pub const ACCESS_TOKEN: &str = "integration-access-token";
pub const SECRET_KEY: &str = "integration-secret-key";

pub const RATE_LIMIT_BODY: &str = r#"{"result":"error","error_code":"4","error_msg":"rate limit"}"#;
pub const BAD_PARAM_BODY: &str = r#"{"result":"error","error_code":"100","error_msg":"bad param"}"#;
pub const SUCCESS_BODY: &str = r#"{"result":"success","error_code":"0"}"#;

/// Transport that answers every request with the same scripted response
pub struct ScriptedTransport {
    status: u16,
    body: String,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().push(request);
        Ok(HttpResponse::new(self.status, self.body.as_bytes().to_vec()))
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(ACCESS_TOKEN, SECRET_KEY)
}

pub fn client(transport: Arc<ScriptedTransport>, credentials: Option<Credentials>) -> CoinoneRestClient {
    let mut config = ClientConfig::new();
    config.credentials = credentials;
    CoinoneRestClient::with_transport(config, transport)
}
