//! Opaque search filter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A filter expression attached to search parameters.
///
/// The expression tree (AND/OR combinators over string and integer
/// comparisons) is interpreted by the bridge, never here. It is carried
/// through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(Value);

impl Filter {
    pub fn new(expression: Value) -> Self {
        Self(expression)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Filter {
    fn from(expression: Value) -> Self {
        Self(expression)
    }
}
