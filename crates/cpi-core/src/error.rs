//! Error types for the cpi-core library.
//!
//! This module provides a unified error type with explicit variants for
//! local contract violations, bridge protocol violations, business failures
//! reported by the bridge, and transport errors raised by bridge implementations.

use std::fmt;
use thiserror::Error;

/// The unified error type for client API operations.
///
/// Every operation on the surface returns `Result<T, Error>`, so callers
/// must handle both the success payload and each failure category.
#[derive(Debug, Error)]
pub enum Error {
    /// Local contract violations, detected before the bridge is called.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The bridge answered with something that does not honour the envelope contract.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The bridge reported `success: false` for the operation.
    #[error("client API error: {0}")]
    Api(#[from] ApiError),

    /// The bridge could not carry the call at all.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Returns the business failure, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// True if the failure happened before any bridge call was attempted.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

/// Errors raised by bridge implementations while carrying a call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the other side.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// The call did not complete in time.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The carrier itself rejected the call (e.g. a non-2xx HTTP status).
    #[error("bridge returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Anything else the carrier wants to report.
    #[error("{message}")]
    Other { message: String },
}

/// Violations of the envelope contract by the bridge.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The response is not an object, or has no boolean `success` field.
    #[error("bridge function returned invalid response: {response}")]
    InvalidEnvelope { response: String },

    /// The success payload does not fit the operation's result shape.
    #[error("unexpected payload for {operation}: {reason}")]
    UnexpectedPayload { operation: String, reason: String },

    /// A batch operation returned a different number of statuses than objects submitted.
    #[error("{operation} returned {received} statuses for {submitted} objects")]
    StatusCountMismatch {
        operation: String,
        submitted: usize,
        received: usize,
    },
}

/// A business failure reported through a `success: false` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Numeric error code from the bridge.
    pub code: i64,
    /// Error message from the bridge.
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}", self.code)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Local contract violations.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Malformed or unknown operation name.
    #[error("invalid operation name '{value}': {reason}")]
    OperationName { value: String, reason: String },

    /// Empty field list or empty field name.
    #[error("invalid field list: {reason}")]
    Fields { reason: String },

    /// Identifier record with zero or several recognised keys.
    #[error("invalid {kind} identifier: {reason}")]
    Identifier { kind: &'static str, reason: String },

    /// Sorting required by configuration but absent.
    #[error("invalid sorting for {operation}: {reason}")]
    Sorting { operation: String, reason: String },

    /// Operation parameters that do not serialize to a JSON object.
    #[error("invalid parameters for {operation}: {reason}")]
    Params { operation: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = Error::from(ApiError::new(7, "x"));
        assert_eq!(err.to_string(), "client API error: code 7: x");
        assert_eq!(err.as_api().map(|e| e.code), Some(7));
    }

    #[test]
    fn api_error_without_message() {
        assert_eq!(ApiError::new(3, "").to_string(), "code 3");
    }

    #[test]
    fn local_errors() {
        let err = Error::from(InvalidInputError::Fields {
            reason: "cannot be empty".to_string(),
        });
        assert!(err.is_local());
        assert!(err.as_api().is_none());

        let err = Error::from(TransportError::Timeout { duration_ms: 10 });
        assert!(!err.is_local());
    }
}
