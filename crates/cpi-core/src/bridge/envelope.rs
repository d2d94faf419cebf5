//! Response envelope discrimination.

use serde_json::{Map, Value};

use crate::error::{ApiError, Error, ProtocolError};

const SUCCESS_KEY: &str = "success";

/// A bridge response, discriminated on its boolean `success` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The payload: every key of the response except `success`.
    Success(Map<String, Value>),
    /// The structured failure.
    Failure(ApiError),
}

impl Envelope {
    /// Discriminate a raw bridge response.
    ///
    /// Failure details are read from a nested `error: {code, message}` object
    /// when present, otherwise from top-level `code` and `message` keys.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidEnvelope`] if the response is not an
    /// object or has no boolean `success` field.
    pub fn parse(response: Value) -> Result<Self, ProtocolError> {
        let Value::Object(mut map) = response else {
            return Err(ProtocolError::InvalidEnvelope {
                response: response.to_string(),
            });
        };

        let Some(success) = map.get(SUCCESS_KEY).and_then(Value::as_bool) else {
            return Err(ProtocolError::InvalidEnvelope {
                response: Value::Object(map).to_string(),
            });
        };

        if success {
            map.remove(SUCCESS_KEY);
            return Ok(Envelope::Success(map));
        }

        let source = match map.get("error") {
            Some(Value::Object(error)) => error,
            // A bare string `error` is the message itself.
            Some(Value::String(message)) => {
                return Ok(Envelope::Failure(ApiError {
                    code: map.get("code").map(error_code).unwrap_or_default(),
                    message: message.clone(),
                }));
            }
            _ => &map,
        };

        Ok(Envelope::Failure(ApiError {
            code: source.get("code").map(error_code).unwrap_or_default(),
            message: source.get("message").map(message_text).unwrap_or_default(),
        }))
    }

    /// Convert into the payload, or the failure as an [`Error`].
    pub fn into_result(self) -> Result<Map<String, Value>, Error> {
        match self {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Failure(error) => Err(Error::Api(error)),
        }
    }
}

/// Integral codes may arrive as `7`, `7.0` or `"7"`; out-of-range values saturate.
fn error_code(code: &Value) -> i64 {
    let integral = |f: f64| (f.is_finite() && f.fract() == 0.0).then_some(f as i64);
    match code {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral))
            .unwrap_or_default(),
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse().ok().and_then(integral))
                .unwrap_or_default()
        }
        _ => 0,
    }
}

fn message_text(message: &Value) -> String {
    match message {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
