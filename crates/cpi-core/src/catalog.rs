//! The operation catalogue.
//!
//! Every operation the surface exposes is declared once in [`TABLE`]: its id,
//! its wire name and the shape of its parameters and result. The table is
//! loaded into a [`Catalog`] when a client is built; loading checks that every
//! name is well formed, unique, and that the `app` scope only carries mutations.
//!
//! Renaming an entry is a breaking change for the bridge.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, InvalidInputError};
use crate::types::{OperationName, Scope};

/// Parameter/result contract of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `GetParams` → `GetResult`
    Get,
    /// `SearchParams` → `SearchResult`
    Search,
    /// `TransactionLinesSearchParams` → `SearchResult`
    TransactionLinesSearch,
    /// `UpdateParams` → `UpdateResult`
    Update,
    /// `OrderCenterGetParams` → `GetResult`
    OrderCenterGet,
    /// `OrderCenterSearchParams` → `SearchResult`
    OrderCenterSearch,
    /// `OrderCenterUpdateParams` → `UpdateResult`
    OrderCenterUpdate,
    /// `CreateAccountParams` → `CreateResult`
    AddAccount,
    /// `CreateContactParams` → `CreateResult`
    AddContact,
    /// `CreateActivityParams` → `CreateResult`
    AddActivity,
    /// `CreateTransactionParams` → `CreateResult`
    AddTransaction,
    /// `AddTransactionLinesParams` → `UpdateResult`
    AddLines,
    /// `RemoveTransactionLinesParams` → `UpdateResult`
    RemoveLines,
    /// `UdtGetParams` → `UdtGetResult`
    UdtGet,
    /// `UdtGetListParams` → `UdtGetListResult`
    UdtGetList,
    /// `UdtUpsertParams` → `UpdateResult`
    UdtUpsert,
}

impl OperationKind {
    /// True if the operation writes.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            OperationKind::Get
                | OperationKind::Search
                | OperationKind::TransactionLinesSearch
                | OperationKind::OrderCenterGet
                | OperationKind::OrderCenterSearch
                | OperationKind::UdtGet
                | OperationKind::UdtGetList
        )
    }

/// Short kebab-case label, as shown by the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Get => "get",
            OperationKind::Search => "search",
            OperationKind::TransactionLinesSearch => "transaction-lines-search",
            OperationKind::Update => "update",
            OperationKind::OrderCenterGet => "order-center-get",
            OperationKind::OrderCenterSearch => "order-center-search",
            OperationKind::OrderCenterUpdate => "order-center-update",
            OperationKind::AddAccount => "add-account",
            OperationKind::AddContact => "add-contact",
            OperationKind::AddActivity => "add-activity",
            OperationKind::AddTransaction => "add-transaction",
            OperationKind::AddLines => "add-lines",
            OperationKind::RemoveLines => "remove-lines",
            OperationKind::UdtGet => "udt-get",
            OperationKind::UdtGetList => "udt-get-list",
            OperationKind::UdtUpsert => "udt-upsert",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one catalogued operation. The discriminant is its row in [`TABLE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationId {
    ApiTransactionsGet,
    ApiTransactionsUpdate,
    ApiTransactionsSearch,
    ApiTransactionsAddLines,
    ApiTransactionsRemoveLines,
    ApiActivitiesGet,
    ApiActivitiesUpdate,
    ApiActivitiesSearch,
    ApiAccountsGet,
    ApiAccountsUpdate,
    ApiAccountsSearch,
    ApiTransactionLinesGet,
    ApiTransactionLinesUpdate,
    ApiTransactionLinesSearch,
    ApiUsersGet,
    ApiUsersSearch,
    ApiContactsGet,
    ApiContactsUpdate,
    ApiContactsSearch,
    ApiItemsGet,
    ApiItemsSearch,
    ApiCatalogsGet,
    ApiCatalogsSearch,
    ApiAllActivitiesSearch,
    ApiAttachmentsGet,
    ApiAttachmentsSearch,
    ApiUserDefinedTablesGet,
    ApiUserDefinedTablesUpsert,
    ApiUserDefinedTablesGetList,
    ApiTransactionScopeItemsGet,
    ApiTransactionScopeItemsSearch,
    ApiTransactionScopeItemsUpdate,
    AppTransactionsUpdate,
    AppTransactionsAdd,
    AppTransactionsAddLines,
    AppTransactionsRemoveLines,
    AppActivitiesUpdate,
    AppActivitiesAdd,
    AppAccountsUpdate,
    AppAccountsAdd,
    AppTransactionLinesUpdate,
    AppContactsUpdate,
    AppContactsAdd,
    AppTransactionScopeItemsUpdate,
}

/// One row of the catalogue.
#[derive(Clone, Copy, Debug)]
pub struct OperationSpec {
    pub id: OperationId,
    pub name: &'static str,
    pub kind: OperationKind,
}

const fn op(id: OperationId, name: &'static str, kind: OperationKind) -> OperationSpec {
    OperationSpec { id, name, kind }
}

use OperationId::*;
use OperationKind as K;

/// The complete operation table, in [`OperationId`] order.
pub const TABLE: &[OperationSpec] = &[
    op(ApiTransactionsGet, "pepperi.api.transactions.get", K::Get),
    op(ApiTransactionsUpdate, "pepperi.api.transactions.update", K::Update),
    op(ApiTransactionsSearch, "pepperi.api.transactions.search", K::Search),
    op(ApiTransactionsAddLines, "pepperi.api.transactions.addLines", K::AddLines),
    op(ApiTransactionsRemoveLines, "pepperi.api.transactions.removeLines", K::RemoveLines),
    op(ApiActivitiesGet, "pepperi.api.activities.get", K::Get),
    op(ApiActivitiesUpdate, "pepperi.api.activities.update", K::Update),
    op(ApiActivitiesSearch, "pepperi.api.activities.search", K::Search),
    op(ApiAccountsGet, "pepperi.api.accounts.get", K::Get),
    op(ApiAccountsUpdate, "pepperi.api.accounts.update", K::Update),
    op(ApiAccountsSearch, "pepperi.api.accounts.search", K::Search),
    op(ApiTransactionLinesGet, "pepperi.api.transactionLines.get", K::Get),
    op(ApiTransactionLinesUpdate, "pepperi.api.transactionLines.update", K::Update),
    op(ApiTransactionLinesSearch, "pepperi.api.transactionLines.search", K::TransactionLinesSearch),
    op(ApiUsersGet, "pepperi.api.users.get", K::Get),
    op(ApiUsersSearch, "pepperi.api.users.search", K::Search),
    op(ApiContactsGet, "pepperi.api.contacts.get", K::Get),
    op(ApiContactsUpdate, "pepperi.api.contacts.update", K::Update),
    op(ApiContactsSearch, "pepperi.api.contacts.search", K::Search),
    op(ApiItemsGet, "pepperi.api.items.get", K::Get),
    op(ApiItemsSearch, "pepperi.api.items.search", K::Search),
    op(ApiCatalogsGet, "pepperi.api.catalogs.get", K::Get),
    op(ApiCatalogsSearch, "pepperi.api.catalogs.search", K::Search),
    op(ApiAllActivitiesSearch, "pepperi.api.allActivities.search", K::Search),
    op(ApiAttachmentsGet, "pepperi.api.attachments.get", K::Get),
    op(ApiAttachmentsSearch, "pepperi.api.attachments.search", K::Search),
    op(ApiUserDefinedTablesGet, "pepperi.api.userDefinedTables.get", K::UdtGet),
    op(ApiUserDefinedTablesUpsert, "pepperi.api.userDefinedTables.upsert", K::UdtUpsert),
    op(ApiUserDefinedTablesGetList, "pepperi.api.userDefinedTables.getList", K::UdtGetList),
    op(ApiTransactionScopeItemsGet, "pepperi.api.transactionScopeItems.get", K::OrderCenterGet),
    op(
        ApiTransactionScopeItemsSearch,
        "pepperi.api.transactionScopeItems.search",
        K::OrderCenterSearch,
    ),
    op(
        ApiTransactionScopeItemsUpdate,
        "pepperi.api.transactionScopeItems.update",
        K::OrderCenterUpdate,
    ),
    op(AppTransactionsUpdate, "pepperi.app.transactions.update", K::Update),
    op(AppTransactionsAdd, "pepperi.app.transactions.add", K::AddTransaction),
    op(AppTransactionsAddLines, "pepperi.app.transactions.addLines", K::AddLines),
    op(AppTransactionsRemoveLines, "pepperi.app.transactions.removeLines", K::RemoveLines),
    op(AppActivitiesUpdate, "pepperi.app.activities.update", K::Update),
    op(AppActivitiesAdd, "pepperi.app.activities.add", K::AddActivity),
    op(AppAccountsUpdate, "pepperi.app.accounts.update", K::Update),
    op(AppAccountsAdd, "pepperi.app.accounts.add", K::AddAccount),
    op(AppTransactionLinesUpdate, "pepperi.app.transactionLines.update", K::Update),
    op(AppContactsUpdate, "pepperi.app.contacts.update", K::Update),
    op(AppContactsAdd, "pepperi.app.contacts.add", K::AddContact),
    op(
        AppTransactionScopeItemsUpdate,
        "pepperi.app.transactionScopeItems.update",
        K::OrderCenterUpdate,
    ),
];

/// A loaded catalogue entry.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub id: OperationId,
    pub name: OperationName,
    pub kind: OperationKind,
}

/// The validated operation catalogue.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Load and validate [`TABLE`].
    pub fn load() -> Result<Self, Error> {
        Self::from_table(TABLE)
    }

    /// Load and validate an operation table.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::OperationName`] if a name is malformed or
    /// duplicated, if a row is out of [`OperationId`] order, or if an `app`
    /// scope row is not a mutation.
    pub(crate) fn from_table(table: &[OperationSpec]) -> Result<Self, Error> {
        let mut entries = Vec::with_capacity(table.len());
        let mut by_name = HashMap::with_capacity(table.len());

        for (row, spec) in table.iter().enumerate() {
            let name = OperationName::new(spec.name)?;
            let invalid = |reason: String| -> Error {
                InvalidInputError::OperationName {
                    value: spec.name.to_string(),
                    reason,
                }
                .into()
            };

            if spec.id as usize != row {
                return Err(invalid(format!(
                    "row {} is declared for {:?}",
                    row, spec.id
                )));
            }

            if name.scope() == Scope::App && !spec.kind.is_mutation() {
                return Err(invalid(format!(
                    "app scope only exposes mutations, found {}",
                    spec.kind
                )));
            }

            if by_name.insert(spec.name.to_string(), row).is_some() {
                return Err(invalid("declared more than once".to_string()));
            }

            entries.push(CatalogEntry {
                id: spec.id,
                name,
                kind: spec.kind,
            });
        }

        Ok(Self { entries, by_name })
    }

    /// Entry for an operation id.
    pub fn entry(&self, id: OperationId) -> &CatalogEntry {
        &self.entries[id as usize]
    }

    /// Look an operation up by its wire name.
    pub fn lookup(&self, name: &str) -> Result<&CatalogEntry, Error> {
        self.by_name
            .get(name)
            .map(|&row| &self.entries[row])
            .ok_or_else(|| {
                InvalidInputError::OperationName {
                    value: name.to_string(),
                    reason: "not a catalogued operation".to_string(),
                }
                .into()
            })
    }

    /// All entries, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Entries of one scope.
    pub fn scope(&self, scope: Scope) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.name.scope() == scope)
    }

    /// Number of catalogued operations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no operations are catalogued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
