//! Core client API types.
//!
//! These types enforce the wire contract at construction time,
//! so invalid names, empty projections and ambiguous identifiers
//! cannot reach the bridge.

mod fields;
mod identifiers;
mod operation;

pub use fields::{FieldList, Projection, Record};
pub use identifiers::{
    CatalogIdentifier, ItemIdentifier, ObjectIdentifier, TransactionIdentifier, TypeIdentifier,
};
pub use operation::{OperationName, Scope};
