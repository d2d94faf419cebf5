//! Single-object get parameters and results.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{
    FieldList, ItemIdentifier, ObjectIdentifier, Projection, Record, TransactionIdentifier,
};

/// Parameters for a `get` operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetParams {
    pub key: ObjectIdentifier,
    pub fields: FieldList,
}

impl GetParams {
    pub fn new(key: ObjectIdentifier, fields: FieldList) -> Self {
        Self { key, fields }
    }

    /// Get parameters requesting exactly the fields of `P`.
    pub fn projecting<P: Projection>(key: ObjectIdentifier) -> Result<Self, Error> {
        Ok(Self::new(key, FieldList::of::<P>()?))
    }
}

/// Get one item in the scope of a transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderCenterGetParams {
    pub transaction: TransactionIdentifier,
    pub item: ItemIdentifier,
    pub fields: FieldList,
}

/// A single projected record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetResult<T = Record> {
    pub object: T,
}
