//! Request and response payloads for each operation family.
//!
//! Entity contents are open key/value records; only the envelope around them
//! (keys, projections, paging, statuses) is typed here.

mod create;
mod filter;
mod get;
mod lines;
mod search;
mod udt;
mod update;

pub use create::{
    AccountReference, CreateAccountParams, CreateActivityParams, CreateContactParams,
    CreateResult, CreateTransactionParams, TransactionReferences,
};
pub use filter::Filter;
pub use get::{GetParams, GetResult, OrderCenterGetParams};
pub use lines::{AddTransactionLinesParams, NewLine, RemoveTransactionLinesParams};
pub use search::{
    OrderCenterSearchParams, SearchParams, SearchResult, Sort, TransactionLinesSearchParams,
};
pub use udt::{
    UdtEntry, UdtGetListParams, UdtGetListResult, UdtGetParams, UdtGetResult, UdtUpsertParams,
};
pub use update::{
    OrderCenterUpdateObject, OrderCenterUpdateParams, StatusKind, UpdateObject, UpdateParams,
    UpdateResult, UpdateStatus,
};
