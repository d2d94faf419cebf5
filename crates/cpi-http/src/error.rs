//! Errors raised while setting up an HTTP bridge.

use cpi_core::TransportError;
use thiserror::Error;

/// Configuration failures; call-time failures are [`TransportError`]s.
#[derive(Debug, Error)]
pub enum HttpBridgeError {
    /// The endpoint is not a usable bridge URL.
    #[error("invalid bridge URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    /// A configured header value cannot be sent.
    #[error("invalid header value for {name}")]
    InvalidHeader { name: String },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Map a reqwest failure onto the bridge transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error, timeout_ms: Option<u64>) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: timeout_ms.unwrap_or(0),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Other {
            message: err.to_string(),
        }
    }
}
