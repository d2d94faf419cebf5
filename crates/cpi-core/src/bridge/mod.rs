//! The bridge: the single opaque call every operation goes through.
//!
//! A [`Bridge`] takes one JSON object and answers with one JSON value. How the
//! call is carried (in-process, HTTP, a message channel) is up to the
//! implementation. The [`BridgeInvoker`] tags each outgoing record with its
//! operation name and validates the response [`Envelope`].

mod envelope;
mod invoker;

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

pub use envelope::Envelope;
pub use invoker::{BridgeInvoker, FUNCTION_KEY};

/// A transport able to execute one client API call.
///
/// The record passed to [`Bridge::call`] always carries a `function` key
/// naming the operation. Implementations must not retry on their own
/// behalf unless that is a documented property of the transport.
#[async_trait]
pub trait Bridge: Send + Sync {
    /// Execute one call and return the raw response.
    async fn call(&self, params: Value) -> Result<Value, TransportError>;
}

#[async_trait]
impl<B: Bridge + ?Sized> Bridge for Arc<B> {
    async fn call(&self, params: Value) -> Result<Value, TransportError> {
        (**self).call(params).await
    }
}

/// A [`Bridge`] backed by an async closure.
///
/// ```
/// use cpi_core::TransportError;
/// use cpi_core::bridge;
/// use serde_json::json;
///
/// let echo = bridge::from_fn(|params| async move {
///     Ok::<_, TransportError>(json!({"success": true, "echo": params}))
/// });
/// # let _ = echo;
/// ```
pub struct FnBridge<F> {
    f: F,
}

/// Wrap an async closure as a [`Bridge`].
pub fn from_fn<F, Fut>(f: F) -> FnBridge<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, TransportError>> + Send + 'static,
{
    FnBridge { f }
}

#[async_trait]
impl<F, Fut> Bridge for FnBridge<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, TransportError>> + Send + 'static,
{
    async fn call(&self, params: Value) -> Result<Value, TransportError> {
        (self.f)(params).await
    }
}
