//! The `pepperi.app` namespace: mutation entry points only.

use crate::Result;
use crate::catalog::OperationId;
use crate::model::*;

use super::ClientApi;

/// Mutation entry points of the `pepperi.app` namespace.
#[derive(Clone, Copy, Debug)]
pub struct AppScope<'a> {
    client: &'a ClientApi,
}

impl<'a> AppScope<'a> {
    pub(super) fn new(client: &'a ClientApi) -> Self {
        Self { client }
    }

    pub fn transactions(&self) -> AppTransactions<'a> {
        AppTransactions {
            client: self.client,
        }
    }

    pub fn activities(&self) -> AppActivities<'a> {
        AppActivities {
            client: self.client,
        }
    }

    pub fn accounts(&self) -> AppAccounts<'a> {
        AppAccounts {
            client: self.client,
        }
    }

    pub fn contacts(&self) -> AppContacts<'a> {
        AppContacts {
            client: self.client,
        }
    }

    pub fn transaction_lines(&self) -> AppTransactionLines<'a> {
        AppTransactionLines {
            client: self.client,
        }
    }

    pub fn transaction_scope_items(&self) -> AppTransactionScopeItems<'a> {
        AppTransactionScopeItems {
            client: self.client,
        }
    }
}

/// Transactions: update, create and line management.
#[derive(Clone, Copy, Debug)]
pub struct AppTransactions<'a> {
    client: &'a ClientApi,
}

impl AppTransactions<'_> {
    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &UpdateParams) -> Result<UpdateResult> {
        self.client
            .update(
                OperationId::AppTransactionsUpdate,
                params.objects.len(),
                params,
            )
            .await
    }

    /// Create a transaction for an account.
    pub async fn add(&self, params: &CreateTransactionParams) -> Result<CreateResult> {
        self.client
            .dispatch(OperationId::AppTransactionsAdd, params)
            .await
    }

    /// Attach lines to a transaction.
    pub async fn add_lines(&self, params: &AddTransactionLinesParams) -> Result<UpdateResult> {
        self.client
            .dispatch(OperationId::AppTransactionsAddLines, params)
            .await
    }

    /// Detach lines from a transaction.
    pub async fn remove_lines(
        &self,
        params: &RemoveTransactionLinesParams,
    ) -> Result<UpdateResult> {
        self.client
            .dispatch(OperationId::AppTransactionsRemoveLines, params)
            .await
    }
}

/// Activities: update and create.
#[derive(Clone, Copy, Debug)]
pub struct AppActivities<'a> {
    client: &'a ClientApi,
}

impl AppActivities<'_> {
    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &UpdateParams) -> Result<UpdateResult> {
        self.client
            .update(
                OperationId::AppActivitiesUpdate,
                params.objects.len(),
                params,
            )
            .await
    }

    /// Create an activity for an account.
    pub async fn add(&self, params: &CreateActivityParams) -> Result<CreateResult> {
        self.client
            .dispatch(OperationId::AppActivitiesAdd, params)
            .await
    }
}

/// Accounts: update and create.
#[derive(Clone, Copy, Debug)]
pub struct AppAccounts<'a> {
    client: &'a ClientApi,
}

impl AppAccounts<'_> {
    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &UpdateParams) -> Result<UpdateResult> {
        self.client
            .update(OperationId::AppAccountsUpdate, params.objects.len(), params)
            .await
    }

    /// Create an account.
    pub async fn add(&self, params: &CreateAccountParams) -> Result<CreateResult> {
        self.client
            .dispatch(OperationId::AppAccountsAdd, params)
            .await
    }
}

/// Contacts: update and create.
#[derive(Clone, Copy, Debug)]
pub struct AppContacts<'a> {
    client: &'a ClientApi,
}

impl AppContacts<'_> {
    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &UpdateParams) -> Result<UpdateResult> {
        self.client
            .update(OperationId::AppContactsUpdate, params.objects.len(), params)
            .await
    }

    /// Create a contact under an account.
    pub async fn add(&self, params: &CreateContactParams) -> Result<CreateResult> {
        self.client
            .dispatch(OperationId::AppContactsAdd, params)
            .await
    }
}

/// Transaction lines: update.
#[derive(Clone, Copy, Debug)]
pub struct AppTransactionLines<'a> {
    client: &'a ClientApi,
}

impl AppTransactionLines<'_> {
    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &UpdateParams) -> Result<UpdateResult> {
        self.client
            .update(
                OperationId::AppTransactionLinesUpdate,
                params.objects.len(),
                params,
            )
            .await
    }
}

/// Items seen through one transaction: update.
#[derive(Clone, Copy, Debug)]
pub struct AppTransactionScopeItems<'a> {
    client: &'a ClientApi,
}

impl AppTransactionScopeItems<'_> {
    /// Write a batch; one status per submitted object, in order.
    pub async fn update(&self, params: &OrderCenterUpdateParams) -> Result<UpdateResult> {
        self.client
            .update(
                OperationId::AppTransactionScopeItemsUpdate,
                params.objects.len(),
                params,
            )
            .await
    }
}
