//! The operation surface.
//!
//! [`ClientApi`] exposes the catalogue as two namespaces: [`ApiScope`] (reads
//! and writes across all entities) and [`AppScope`] (mutation entry points
//! only). Each typed method binds one [`OperationId`] and forwards to the
//! shared [`BridgeInvoker`]; [`ClientApi::call`] reaches the same operations by
//! wire name with an untyped record.

mod api;
mod app;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::bridge::{Bridge, BridgeInvoker};
use crate::catalog::{Catalog, CatalogEntry, OperationId, OperationKind};
use crate::config::{ClientConfig, SortingPolicy};
use crate::error::{Error, InvalidInputError, ProtocolError};
use crate::model::*;
use crate::types::OperationName;

pub use api::{
    AllActivities, ApiScope, ApiTransactions, Entity, ReadOnlyEntity, TransactionLines,
    TransactionScopeItems, UserDefinedTables,
};
pub use app::{
    AppAccounts, AppActivities, AppContacts, AppScope, AppTransactionLines,
    AppTransactionScopeItems, AppTransactions,
};

/// Typed client over a single bridge.
///
/// # Example
///
/// ```
/// use cpi_core::{ClientApi, FieldList, Record, Sort, TransportError, bridge};
/// use cpi_core::model::SearchParams;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), cpi_core::Error> {
/// let client = ClientApi::new(bridge::from_fn(|_params| async {
///     Ok::<_, TransportError>(json!({
///         "success": true, "objects": [{"Name": "A"}], "count": 1, "page": 0
///     }))
/// }))?;
///
/// let params = SearchParams::new(FieldList::new(["Name"])?)
///     .page_size(10)
///     .sort_by(Sort::ascending("Name"));
/// let page = client.api().accounts().search::<Record>(&params).await?;
/// assert_eq!(page.count, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ClientApi {
    invoker: BridgeInvoker,
    catalog: Arc<Catalog>,
    config: ClientConfig,
}

impl ClientApi {
    /// Build a client with the default configuration.
    pub fn new(bridge: impl Bridge + 'static) -> Result<Self, Error> {
        Self::with_config(bridge, ClientConfig::default())
    }

    /// Build a client with an explicit configuration.
    pub fn with_config(bridge: impl Bridge + 'static, config: ClientConfig) -> Result<Self, Error> {
        Self::from_invoker(BridgeInvoker::new(bridge), config)
    }

    /// Build a client over an existing invoker.
    ///
    /// # Errors
    ///
    /// Fails if the operation catalogue does not validate.
    pub fn from_invoker(invoker: BridgeInvoker, config: ClientConfig) -> Result<Self, Error> {
        let catalog = Arc::new(Catalog::load()?);
        debug!(operations = catalog.len(), sorting = %config.sorting, "client API ready");
        Ok(Self {
            invoker,
            catalog,
            config,
        })
    }

    /// Read/write operations across all entities.
    pub fn api(&self) -> ApiScope<'_> {
        ApiScope::new(self)
    }

    /// Mutation entry points for the app calling context.
    pub fn app(&self) -> AppScope<'_> {
        AppScope::new(self)
    }

    /// The operation catalogue this client dispatches through.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Wire name of an operation.
    pub fn operation_name(&self, id: OperationId) -> &OperationName {
        &self.catalog.entry(id).name
    }

    /// Invoke a catalogued operation by wire name with an untyped parameter record.
    ///
    /// The record is checked against the operation's parameter contract
    /// (required keys, identifiers, non-empty fields, sorting policy) and then
    /// forwarded unchanged apart from the `function` key. Returns the success
    /// payload.
    pub async fn call(&self, name: &str, params: Value) -> Result<Value, Error> {
        let entry = self.catalog.lookup(name)?;

        let Value::Object(params) = params else {
            return Err(InvalidInputError::Params {
                operation: name.to_string(),
                reason: "expected an object".to_string(),
            }
            .into());
        };

        let submitted = self.check_untyped(entry, &params)?;
        let payload = self.invoker.invoke_raw(&entry.name, params).await?;

        if let Some(submitted) = submitted {
            let received = payload
                .get("result")
                .and_then(Value::as_array)
                .map(Vec::len)
                .ok_or_else(|| ProtocolError::UnexpectedPayload {
                    operation: name.to_string(),
                    reason: "missing `result` status list".to_string(),
                })?;
            check_status_count(&entry.name, submitted, received)?;
        }

        Ok(Value::Object(payload))
    }

    /// Validates an untyped record against its operation kind.
    ///
    /// Returns the number of submitted objects for kinds that answer with one
    /// status per object.
    fn check_untyped(
        &self,
        entry: &CatalogEntry,
        params: &Map<String, Value>,
    ) -> Result<Option<usize>, Error> {
        let name = &entry.name;
        match entry.kind {
            OperationKind::Get => {
                parse_params::<GetParams>(name, params)?;
            }
            OperationKind::Search => {
                let p: SearchParams = parse_params(name, params)?;
                self.check_sorting(name, &p)?;
            }
            OperationKind::TransactionLinesSearch => {
                let p: TransactionLinesSearchParams = parse_params(name, params)?;
                self.check_sorting(name, &p.search)?;
            }
            OperationKind::OrderCenterSearch => {
                let p: OrderCenterSearchParams = parse_params(name, params)?;
                self.check_sorting(name, &p.search)?;
            }
            OperationKind::OrderCenterGet => {
                parse_params::<OrderCenterGetParams>(name, params)?;
            }
            OperationKind::Update => {
                let p: UpdateParams = parse_params(name, params)?;
                return Ok(Some(p.objects.len()));
            }
            OperationKind::OrderCenterUpdate => {
                let p: OrderCenterUpdateParams = parse_params(name, params)?;
                return Ok(Some(p.objects.len()));
            }
            OperationKind::AddAccount => {
                parse_params::<CreateAccountParams>(name, params)?;
            }
            OperationKind::AddContact => {
                parse_params::<CreateContactParams>(name, params)?;
            }
            OperationKind::AddActivity => {
                parse_params::<CreateActivityParams>(name, params)?;
            }
            OperationKind::AddTransaction => {
                parse_params::<CreateTransactionParams>(name, params)?;
            }
            OperationKind::AddLines => {
                parse_params::<AddTransactionLinesParams>(name, params)?;
            }
            OperationKind::RemoveLines => {
                parse_params::<RemoveTransactionLinesParams>(name, params)?;
            }
            OperationKind::UdtGet => {
                parse_params::<UdtGetParams>(name, params)?;
            }
            OperationKind::UdtGetList => {
                parse_params::<UdtGetListParams>(name, params)?;
            }
            OperationKind::UdtUpsert => {
                parse_params::<UdtUpsertParams>(name, params)?;
            }
        }
        Ok(None)
    }

    fn check_sorting(&self, name: &OperationName, params: &SearchParams) -> Result<(), Error> {
        if self.config.sorting == SortingPolicy::Required && !params.is_sorted() {
            return Err(InvalidInputError::Sorting {
                operation: name.to_string(),
                reason: "at least one sort key is required".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub(crate) async fn dispatch<P, R>(&self, id: OperationId, params: &P) -> Result<R, Error>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        self.invoker.invoke(self.operation_name(id), params).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        id: OperationId,
        params: &GetParams,
    ) -> Result<GetResult<T>, Error> {
        self.dispatch(id, params).await
    }

    /// Search with the sorting policy applied to `search`.
    pub(crate) async fn search<P, T>(
        &self,
        id: OperationId,
        search: &SearchParams,
        params: &P,
    ) -> Result<SearchResult<T>, Error>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        self.check_sorting(self.operation_name(id), search)?;
        self.dispatch(id, params).await
    }

    /// Batch update answering one status per submitted object.
    pub(crate) async fn update<P: Serialize>(
        &self,
        id: OperationId,
        submitted: usize,
        params: &P,
    ) -> Result<UpdateResult, Error> {
        let result: UpdateResult = self.dispatch(id, params).await?;
        check_status_count(self.operation_name(id), submitted, result.len())?;
        Ok(result)
    }
}

fn parse_params<P: DeserializeOwned>(
    name: &OperationName,
    params: &Map<String, Value>,
) -> Result<P, Error> {
    serde_json::from_value(Value::Object(params.clone())).map_err(|err| {
        InvalidInputError::Params {
            operation: name.to_string(),
            reason: err.to_string(),
        }
        .into()
    })
}

fn check_status_count(
    name: &OperationName,
    submitted: usize,
    received: usize,
) -> Result<(), Error> {
    if submitted != received {
        return Err(ProtocolError::StatusCountMismatch {
            operation: name.to_string(),
            submitted,
            received,
        }
        .into());
    }
    Ok(())
}
