//! cpi-core - Typed client API over a single opaque bridge.
//!
//! Every operation (get, search, update, add, line and user-defined table
//! operations across the `pepperi.api` and `pepperi.app` namespaces) is
//! carried by one generic asynchronous call, the [`Bridge`]. This crate maps
//! each typed operation to its wire name, tags the outgoing record with it,
//! and turns the bridge's response envelope into a typed result or an [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use cpi_core::{ClientApi, FieldList, ObjectIdentifier, Record, TransportError, bridge};
//! use cpi_core::model::GetParams;
//! use serde_json::Value;
//!
//! # async fn transport(_params: Value) -> Result<Value, TransportError> { unimplemented!() }
//! # async fn example() -> Result<(), cpi_core::Error> {
//! let client = ClientApi::new(bridge::from_fn(transport))?;
//!
//! let params = GetParams::new(
//!     ObjectIdentifier::InternalId(42),
//!     FieldList::new(["Name", "Phone"])?,
//! );
//! let account = client.api().accounts().get::<Record>(&params).await?;
//! println!("{}", account.object["Name"]);
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod surface;
pub mod types;

// Re-export primary types at crate root for convenience
pub use bridge::{Bridge, BridgeInvoker, Envelope};
pub use catalog::{Catalog, OperationId, OperationKind};
pub use config::{ClientConfig, SortingPolicy};
pub use error::{ApiError, Error, InvalidInputError, ProtocolError, TransportError};
pub use model::{Filter, Sort};
pub use surface::ClientApi;
pub use types::{
    CatalogIdentifier, FieldList, ItemIdentifier, ObjectIdentifier, OperationName, Projection,
    Record, Scope, TransactionIdentifier, TypeIdentifier,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
