//! cpi-http - An HTTP carrier for the client API bridge.
//!
//! [`HttpBridge`] implements [`cpi_core::Bridge`] by POSTing each parameter
//! record as JSON to a single endpoint and handing the JSON response body back
//! unchanged. Envelope validation stays in `cpi-core`; this crate only maps
//! network and HTTP status failures to [`cpi_core::TransportError`].
//!
//! # Example
//!
//! ```no_run
//! use cpi_core::{ClientApi, FieldList, Record};
//! use cpi_core::model::SearchParams;
//! use cpi_http::{BridgeUrl, HttpBridge};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = BridgeUrl::new("https://bridge.example.com/cpi")?;
//! let client = ClientApi::new(HttpBridge::new(endpoint)?)?;
//!
//! let page = client
//!     .api()
//!     .accounts()
//!     .search::<Record>(&SearchParams::new(FieldList::new(["Name"])?))
//!     .await?;
//! println!("{} accounts", page.count);
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoint;
mod error;

pub use client::{HttpBridge, HttpBridgeBuilder};
pub use endpoint::BridgeUrl;
pub use error::HttpBridgeError;
