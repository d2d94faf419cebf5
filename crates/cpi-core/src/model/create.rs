//! Creation payloads for the `app` scope `add` operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{CatalogIdentifier, ObjectIdentifier, TypeIdentifier};

use super::UpdateStatus;

/// Result of an `add` operation: the status of the created object.
pub type CreateResult = UpdateStatus;

/// References for objects that hang off an account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountReference {
    pub account: ObjectIdentifier,
}

/// References for a new transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReferences {
    pub account: ObjectIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_account: Option<ObjectIdentifier>,
}

/// Parameters for `accounts.add`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountParams {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<TypeIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Map<String, Value>>,
}

/// Parameters for `contacts.add`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateContactParams {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<TypeIdentifier>,
    pub references: AccountReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Map<String, Value>>,
}

/// Parameters for `activities.add`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateActivityParams {
    #[serde(rename = "type")]
    pub type_id: TypeIdentifier,
    pub references: AccountReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Map<String, Value>>,
}

/// Parameters for `transactions.add`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionParams {
    #[serde(rename = "type")]
    pub type_id: TypeIdentifier,
    pub references: TransactionReferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_params_may_be_empty() {
        let params = CreateAccountParams::default();
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({}));
    }

    #[test]
    fn transaction_params_wire_shape() {
        let params = CreateTransactionParams {
            type_id: TypeIdentifier::Name("Sales Order".to_string()),
            references: TransactionReferences {
                account: ObjectIdentifier::InternalId(10),
                catalog: Some(CatalogIdentifier::Name("Default".to_string())),
                origin_account: None,
            },
            object: None,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "type": {"Name": "Sales Order"},
                "references": {"account": {"InternalID": 10}, "catalog": {"Name": "Default"}}
            })
        );
    }

    #[test]
    fn activity_requires_type() {
        let result: Result<CreateActivityParams, _> = serde_json::from_value(json!({
            "references": {"account": {"UUID": "a"}}
        }));
        assert!(result.is_err());
    }
}
