//! The `pepperi.api` namespace.

use serde::de::DeserializeOwned;

use crate::Result;
use crate::catalog::OperationId;
use crate::model::*;

use super::ClientApi;

/// Read/write operations across all entities.
#[derive(Clone, Copy, Debug)]
pub struct ApiScope<'a> {
    client: &'a ClientApi,
}

impl<'a> ApiScope<'a> {
    pub(super) fn new(client: &'a ClientApi) -> Self {
        Self { client }
    }

    pub fn transactions(&self) -> ApiTransactions<'a> {
        ApiTransactions {
            client: self.client,
        }
    }

    pub fn activities(&self) -> Entity<'a> {
        Entity {
            client: self.client,
            get: OperationId::ApiActivitiesGet,
            search: OperationId::ApiActivitiesSearch,
            update: OperationId::ApiActivitiesUpdate,
        }
    }

    pub fn accounts(&self) -> Entity<'a> {
        Entity {
            client: self.client,
            get: OperationId::ApiAccountsGet,
            search: OperationId::ApiAccountsSearch,
            update: OperationId::ApiAccountsUpdate,
        }
    }

    pub fn contacts(&self) -> Entity<'a> {
        Entity {
            client: self.client,
            get: OperationId::ApiContactsGet,
            search: OperationId::ApiContactsSearch,
            update: OperationId::ApiContactsUpdate,
        }
    }

    pub fn transaction_lines(&self) -> TransactionLines<'a> {
        TransactionLines {
            client: self.client,
        }
    }

    pub fn users(&self) -> ReadOnlyEntity<'a> {
        ReadOnlyEntity {
            client: self.client,
            get: OperationId::ApiUsersGet,
            search: OperationId::ApiUsersSearch,
        }
    }

    pub fn items(&self) -> ReadOnlyEntity<'a> {
        ReadOnlyEntity {
            client: self.client,
            get: OperationId::ApiItemsGet,
            search: OperationId::ApiItemsSearch,
        }
    }

    pub fn catalogs(&self) -> ReadOnlyEntity<'a> {
        ReadOnlyEntity {
            client: self.client,
            get: OperationId::ApiCatalogsGet,
            search: OperationId::ApiCatalogsSearch,
        }
    }

    pub fn attachments(&self) -> ReadOnlyEntity<'a> {
        ReadOnlyEntity {
            client: self.client,
            get: OperationId::ApiAttachmentsGet,
            search: OperationId::ApiAttachmentsSearch,
        }
    }

    /// Search across every activity kind (activities and transactions).
    pub fn all_activities(&self) -> AllActivities<'a> {
        AllActivities {
            client: self.client,
        }
    }

    pub fn user_defined_tables(&self) -> UserDefinedTables<'a> {
        UserDefinedTables {
            client: self.client,
        }
    }

    /// Item operations scoped to one transaction (order center).
    pub fn transaction_scope_items(&self) -> TransactionScopeItems<'a> {
        TransactionScopeItems {
            client: self.client,
        }
    }
}

/// An entity with get, search and update.
#[derive(Clone, Copy, Debug)]
pub struct Entity<'a> {
    client: &'a ClientApi,
    get: OperationId,
    search: OperationId,
    update: OperationId,
}

impl Entity<'_> {
    /// Fetch one object, projected to `params.fields`.
    pub async fn get<T: DeserializeOwned>(&self, params: &GetParams) -> Result<GetResult<T>> {
        self.client.get(self.get, params).await
    }

    /// Fetch one page of objects, projected to `params.fields`.
    pub async fn search<T: DeserializeOwned>(
        &self,
        params: &SearchParams,
    ) -> Result<SearchResult<T>> {
        self.client.search(self.search, params, params).await
    }

    /// Write a batch of partial objects; one status per object, in order.
    pub async fn update(&self, params: &UpdateParams) -> Result<UpdateResult> {
        self.client
            .update(self.update, params.objects.len(), params)
            .await
    }
}

/// A read-only entity (users, items, catalogs, attachments).
#[derive(Clone, Copy, Debug)]
pub struct ReadOnlyEntity<'a> {
    client: &'a ClientApi,
    get: OperationId,
    search: OperationId,
}

impl ReadOnlyEntity<'_> {
    /// Fetch one object, projected to `params.fields`.
    pub async fn get<T: DeserializeOwned>(&self, params: &GetParams) -> Result<GetResult<T>> {
        self.client.get(self.get, params).await
    }

    /// Fetch one page of objects, projected to `params.fields`.
    pub async fn search<T: DeserializeOwned>(
        &self,
        params: &SearchParams,
    ) -> Result<SearchResult<T>> {
        self.client.search(self.search, params, params).await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AllActivities<'a> {
    client: &'a ClientApi,
}

impl AllActivities<'_> {
    /// Fetch one page of objects, projected to `params.fields`.
    pub async fn search<T: DeserializeOwned>(
        &self,
        params: &SearchParams,
    ) -> Result<SearchResult<T>> {
        self.client
            .search(OperationId::ApiAllActivitiesSearch, params, params)
            .await
    }
}

/// Transactions: reads, batch update and line management.
#[derive(Clone, Copy, Debug)]
pub struct ApiTransactions<'a> {
    client: &'a ClientApi,
}

impl ApiTransactions<'_> {
    /// Fetch one object, projected to `params.fields`.
    pub async fn get<T: DeserializeOwned>(&self, params: &GetParams) -> Result<GetResult<T>> {
        self.client
            .get(OperationId::ApiTransactionsGet, params)
            .await
    }

    /// Fetch one page of objects, projected to `params.fields`.
    pub async fn search<T: DeserializeOwned>(
        &self,
        params: &SearchParams,
    ) -> Result<SearchResult<T>> {
        self.client
            .search(OperationId::ApiTransactionsSearch, params, params)
            .await
    }

    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &UpdateParams) -> Result<UpdateResult> {
        self.client
            .update(
                OperationId::ApiTransactionsUpdate,
                params.objects.len(),
                params,
            )
            .await
    }

    /// Attach lines to a transaction.
    pub async fn add_lines(&self, params: &AddTransactionLinesParams) -> Result<UpdateResult> {
        self.client
            .dispatch(OperationId::ApiTransactionsAddLines, params)
            .await
    }

    /// Detach lines from a transaction.
    pub async fn remove_lines(
        &self,
        params: &RemoveTransactionLinesParams,
    ) -> Result<UpdateResult> {
        self.client
            .dispatch(OperationId::ApiTransactionsRemoveLines, params)
            .await
    }
}

/// Transaction lines: get, search and batch update.
#[derive(Clone, Copy, Debug)]
pub struct TransactionLines<'a> {
    client: &'a ClientApi,
}

impl TransactionLines<'_> {
    /// Fetch one object, projected to `params.fields`.
    pub async fn get<T: DeserializeOwned>(&self, params: &GetParams) -> Result<GetResult<T>> {
        self.client
            .get(OperationId::ApiTransactionLinesGet, params)
            .await
    }

    /// Search lines; `transaction_filter` narrows by parent transaction.
    pub async fn search<T: DeserializeOwned>(
        &self,
        params: &TransactionLinesSearchParams,
    ) -> Result<SearchResult<T>> {
        self.client
            .search(OperationId::ApiTransactionLinesSearch, &params.search, params)
            .await
    }

    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &UpdateParams) -> Result<UpdateResult> {
        self.client
            .update(
                OperationId::ApiTransactionLinesUpdate,
                params.objects.len(),
                params,
            )
            .await
    }
}

/// The user-defined tables key/value store.
#[derive(Clone, Copy, Debug)]
pub struct UserDefinedTables<'a> {
    client: &'a ClientApi,
}

impl UserDefinedTables<'_> {
    /// Read one value.
    pub async fn get(&self, params: &UdtGetParams) -> Result<UdtGetResult> {
        self.client
            .dispatch(OperationId::ApiUserDefinedTablesGet, params)
            .await
    }

    /// List table rows.
    pub async fn get_list(&self, params: &UdtGetListParams) -> Result<UdtGetListResult> {
        self.client
            .dispatch(OperationId::ApiUserDefinedTablesGetList, params)
            .await
    }

    /// Insert or replace one value.
    pub async fn upsert(&self, params: &UdtUpsertParams) -> Result<UpdateResult> {
        self.client
            .dispatch(OperationId::ApiUserDefinedTablesUpsert, params)
            .await
    }
}

/// Items seen through one transaction (order center).
#[derive(Clone, Copy, Debug)]
pub struct TransactionScopeItems<'a> {
    client: &'a ClientApi,
}

impl TransactionScopeItems<'_> {
    /// Fetch one object, projected to `params.fields`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        params: &OrderCenterGetParams,
    ) -> Result<GetResult<T>> {
        self.client
            .dispatch(OperationId::ApiTransactionScopeItemsGet, params)
            .await
    }

    /// Fetch one page of objects, projected to `params.fields`.
    pub async fn search<T: DeserializeOwned>(
        &self,
        params: &OrderCenterSearchParams,
    ) -> Result<SearchResult<T>> {
        self.client
            .search(
                OperationId::ApiTransactionScopeItemsSearch,
                &params.search,
                params,
            )
            .await
    }

    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &OrderCenterUpdateParams) -> Result<UpdateResult> {
        self.client
            .update(
                OperationId::ApiTransactionScopeItemsUpdate,
                params.objects.len(),
                params,
            )
            .await
    }
}
