//! HTTP bridge implementation.

use std::time::Duration;

use async_trait::async_trait;
use cpi_core::{Bridge, TransportError};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::endpoint::BridgeUrl;
use crate::error::{HttpBridgeError, transport_error};

const USER_AGENT: &str = concat!("cpi/", env!("CARGO_PKG_VERSION"));

/// Carries each bridge call as one JSON POST to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpBridge {
    client: reqwest::Client,
    endpoint: BridgeUrl,
    timeout: Option<Duration>,
}

impl HttpBridge {
    /// An HTTP bridge with no timeout and no extra headers.
    pub fn new(endpoint: BridgeUrl) -> Result<Self, HttpBridgeError> {
        Self::builder(endpoint).build()
    }

    pub fn builder(endpoint: BridgeUrl) -> HttpBridgeBuilder {
        HttpBridgeBuilder {
            endpoint,
            timeout: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn endpoint(&self) -> &BridgeUrl {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn timeout_ms(&self) -> Option<u64> {
        self.timeout.map(|t| t.as_millis() as u64)
    }
}

#[async_trait]
impl Bridge for HttpBridge {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn call(&self, params: Value) -> Result<Value, TransportError> {
        let function = params
            .get("function")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        debug!(function, "bridge POST");

        let response = self
            .client
            .post(self.endpoint.as_url().clone())
            .json(&params)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_ms()))?;

        let status = response.status();
        trace!(status = %status, "bridge response");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, self.timeout_ms()))?;

        serde_json::from_slice(&body).map_err(|e| TransportError::Other {
            message: format!("response body is not JSON: {}", e),
        })
    }
}

/// Configures an [`HttpBridge`].
#[derive(Debug)]
pub struct HttpBridgeBuilder {
    endpoint: BridgeUrl,
    timeout: Option<Duration>,
    headers: HeaderMap,
}

impl HttpBridgeBuilder {
    /// Fail calls that take longer than `timeout` end to end.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send `Authorization: Bearer <token>` with every call.
    pub fn bearer_token(self, token: &str) -> Result<Self, HttpBridgeError> {
        self.header(AUTHORIZATION.as_str(), &format!("Bearer {}", token))
    }

    /// Send an extra header with every call.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, HttpBridgeError> {
        let invalid = || HttpBridgeError::InvalidHeader {
            name: name.to_string(),
        };
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let mut value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        if name == AUTHORIZATION {
            value.set_sensitive(true);
        }
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn build(self) -> Result<HttpBridge, HttpBridgeError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(self.headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpBridge {
            client: builder.build()?,
            endpoint: self.endpoint,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_creation() {
        let endpoint = BridgeUrl::new("https://bridge.example.com/cpi").unwrap();
        let bridge = HttpBridge::new(endpoint.clone()).unwrap();
        assert_eq!(bridge.endpoint(), &endpoint);
        assert_eq!(bridge.timeout(), None);
    }

    #[test]
    fn builder_keeps_timeout() {
        let endpoint = BridgeUrl::new("https://bridge.example.com").unwrap();
        let bridge = HttpBridge::builder(endpoint)
            .timeout(Duration::from_millis(1500))
            .build()
            .unwrap();
        assert_eq!(bridge.timeout_ms(), Some(1500));
    }

    #[test]
    fn invalid_header_rejected() {
        let endpoint = BridgeUrl::new("https://bridge.example.com").unwrap();
        let err = HttpBridge::builder(endpoint)
            .header("X-Token", "line\nbreak")
            .unwrap_err();
        assert!(matches!(err, HttpBridgeError::InvalidHeader { name } if name == "X-Token"));
    }
}
