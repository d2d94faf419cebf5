//! Attaching and detaching transaction lines.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{ItemIdentifier, ObjectIdentifier, TransactionIdentifier};

/// A line to attach to a transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLine {
    pub item: ItemIdentifier,
    /// Existing line the new line is placed after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_line: Option<ObjectIdentifier>,
    #[serde(default)]
    pub line_data: Map<String, Value>,
}

impl NewLine {
    pub fn new(item: ItemIdentifier) -> Self {
        Self {
            item,
            leading_line: None,
            line_data: Map::new(),
        }
    }

    pub fn after(mut self, leading_line: ObjectIdentifier) -> Self {
        self.leading_line = Some(leading_line);
        self
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.line_data.insert(field.into(), value.into());
        self
    }
}

/// Parameters for `transactions.addLines`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddTransactionLinesParams {
    pub transaction: TransactionIdentifier,
    pub lines: Vec<NewLine>,
}

/// Parameters for `transactions.removeLines`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoveTransactionLinesParams {
    pub transaction: TransactionIdentifier,
    pub lines: Vec<ObjectIdentifier>,
}
