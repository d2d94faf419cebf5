//! Bridge invoker: the single choke point between operations and the bridge.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace, warn};

use crate::error::{Error, InvalidInputError, ProtocolError};
use crate::types::OperationName;

use super::{Bridge, Envelope};

/// Reserved parameter key carrying the operation name.
pub const FUNCTION_KEY: &str = "function";

/// Tags parameters with their operation name, calls the bridge once, and
/// validates the response envelope.
#[derive(Clone)]
pub struct BridgeInvoker {
    bridge: Arc<dyn Bridge>,
}

impl BridgeInvoker {
    /// Create an invoker over the given bridge.
    pub fn new(bridge: impl Bridge + 'static) -> Self {
        Self {
            bridge: Arc::new(bridge),
        }
    }

    /// Invoke an operation with an untyped parameter record.
    ///
    /// Any `function` key already present in `params` is overwritten.
    /// Returns the success payload (the envelope minus `success`).
    #[instrument(skip_all, fields(operation = %operation))]
    pub async fn invoke_raw(
        &self,
        operation: &OperationName,
        mut params: Map<String, Value>,
    ) -> Result<Map<String, Value>, Error> {
        params.insert(
            FUNCTION_KEY.to_string(),
            Value::String(operation.as_str().to_string()),
        );

        debug!("bridge call");
        trace!(?params, "bridge parameters");

        let response = self.bridge.call(Value::Object(params)).await?;

        let envelope = Envelope::parse(response).inspect_err(|err| {
            warn!(error = %err, "bridge violated envelope contract");
        })?;

        if let Envelope::Failure(error) = &envelope {
            debug!(code = error.code, message = %error.message, "bridge reported failure");
        }
        envelope.into_result()
    }

    /// Invoke an operation with typed parameters and a typed result.
    ///
    /// # Errors
    ///
    /// - [`InvalidInputError::Params`] if `params` does not serialize to an object
    /// - [`ProtocolError::UnexpectedPayload`] if the payload does not fit `R`
    /// - any error from [`invoke_raw`](Self::invoke_raw)
    pub async fn invoke<P, R>(&self, operation: &OperationName, params: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let params = match serde_json::to_value(params) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(InvalidInputError::Params {
                    operation: operation.to_string(),
                    reason: format!("got {}", json_kind(&other)),
                }
                .into());
            }
            Err(err) => {
                return Err(InvalidInputError::Params {
                    operation: operation.to_string(),
                    reason: err.to_string(),
                }
                .into());
            }
        };

        let payload = self.invoke_raw(operation, params).await?;

        serde_json::from_value(Value::Object(payload)).map_err(|err| {
            ProtocolError::UnexpectedPayload {
                operation: operation.to_string(),
                reason: err.to_string(),
            }
            .into()
        })
    }
}

impl fmt::Debug for BridgeInvoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeInvoker").finish_non_exhaustive()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge;
    use crate::error::{ApiError, TransportError};
    use serde_json::json;
    use std::sync::Mutex;

    fn op() -> OperationName {
        OperationName::new("pepperi.api.accounts.search").unwrap()
    }

    #[tokio::test]
    async fn overwrites_function_key() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let invoker = BridgeInvoker::new(bridge::from_fn(move |params| {
            sink.lock().unwrap().push(params);
            async { Ok::<_, TransportError>(json!({"success": true})) }
        }));

        let mut params = Map::new();
        params.insert("function".to_string(), json!("pepperi.api.users.get"));
        params.insert("fields".to_string(), json!(["Name"]));
        invoker.invoke_raw(&op(), params).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["function"], "pepperi.api.accounts.search");
        assert_eq!(seen[0]["fields"], json!(["Name"]));
    }

    #[tokio::test]
    async fn failure_envelope_becomes_api_error() {
        let invoker = BridgeInvoker::new(bridge::from_fn(|_| async {
            Ok::<_, TransportError>(json!({"success": false, "error": {"code": 7, "message": "x"}}))
        }));

        let err = invoker.invoke_raw(&op(), Map::new()).await.unwrap_err();
        assert_eq!(err.as_api(), Some(&ApiError::new(7, "x")));
    }

    #[tokio::test]
    async fn transport_error_passes_through() {
        let invoker = BridgeInvoker::new(bridge::from_fn(|_| async {
            Err::<Value, _>(TransportError::Connection {
                message: "refused".to_string(),
            })
        }));

        let err = invoker.invoke_raw(&op(), Map::new()).await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Connection { .. })));
    }

    #[tokio::test]
    async fn non_object_params_rejected_before_call() {
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let invoker = BridgeInvoker::new(bridge::from_fn(move |_| {
            *counter.lock().unwrap() += 1;
            async { Ok::<_, TransportError>(json!({"success": true})) }
        }));

        let err = invoker
            .invoke::<_, Value>(&op(), &vec![1, 2])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::Params { .. })
        ));
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn payload_shape_mismatch_is_protocol_error() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Expected {
            count: u64,
        }

        let invoker = BridgeInvoker::new(bridge::from_fn(|_| async {
            Ok::<_, TransportError>(json!({"success": true, "count": "many"}))
        }));

        let err = invoker
            .invoke::<_, Expected>(&op(), &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::UnexpectedPayload { .. })
        ));
    }
}
