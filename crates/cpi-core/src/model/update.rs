//! Batch update parameters and per-record statuses.
//!
//! A batch is not atomic: the bridge answers with one [`UpdateStatus`] per
//! submitted object, in submission order, and some may fail while others
//! succeed. That is a normal result, not an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{ItemIdentifier, TransactionIdentifier};

/// A partial record to write, keyed by its UUID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateObject {
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UpdateObject {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            fields: Map::new(),
        }
    }

    /// Set a field to write.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

/// Parameters for an `update` operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateParams {
    pub objects: Vec<UpdateObject>,
    /// `true` commits durably; `false` or absent stages a draft write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save: Option<bool>,
}

impl UpdateParams {
    pub fn new(objects: Vec<UpdateObject>) -> Self {
        Self {
            objects,
            save: None,
        }
    }

    pub fn save(mut self, save: bool) -> Self {
        self.save = Some(save);
        self
    }
}

/// A partial item record to write within one transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderCenterUpdateObject {
    pub item: ItemIdentifier,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl OrderCenterUpdateObject {
    pub fn new(item: ItemIdentifier) -> Self {
        Self {
            item,
            fields: Map::new(),
        }
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

/// Update items in the scope of one transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderCenterUpdateParams {
    pub transaction: TransactionIdentifier,
    pub objects: Vec<OrderCenterUpdateObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save: Option<bool>,
}

/// Outcome of one submitted record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Updated,
    Failed,
    Added,
    Deleted,
}

impl StatusKind {
    /// Wire spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Updated => "updated",
            StatusKind::Failed => "failed",
            StatusKind::Added => "added",
            StatusKind::Deleted => "deleted",
        }
    }
}

/// Status of one record in a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatus {
    pub id: String,
    pub status: StatusKind,
    #[serde(default)]
    pub message: String,
}

impl UpdateStatus {
    pub fn is_failure(&self) -> bool {
        self.status == StatusKind::Failed
    }
}

/// Statuses for a batch, in submission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    pub result: Vec<UpdateStatus>,
}

impl UpdateResult {
    /// Statuses that report a failure.
    pub fn failures(&self) -> impl Iterator<Item = &UpdateStatus> {
        self.result.iter().filter(|s| s.is_failure())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_object_flattens_fields() {
        let params =
            UpdateParams::new(vec![UpdateObject::new("u-1").set("Phone", "555")]).save(true);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"objects": [{"UUID": "u-1", "Phone": "555"}], "save": true})
        );
    }

    #[test]
    fn update_object_parses_extra_fields() {
        let object: UpdateObject =
            serde_json::from_value(json!({"UUID": "u-1", "Name": "A", "Qty": 2})).unwrap();
        assert_eq!(object.uuid, "u-1");
        assert_eq!(object.fields.len(), 2);
        assert!(!object.fields.contains_key("UUID"));
    }

    #[test]
    fn update_object_requires_uuid() {
        let result: Result<UpdateObject, _> = serde_json::from_value(json!({"Name": "A"}));
        assert!(result.is_err());
    }

    #[test]
    fn scoped_update_wire_shape() {
        let params = OrderCenterUpdateParams {
            transaction: TransactionIdentifier::Uuid("t".to_string()),
            objects: vec![
                OrderCenterUpdateObject::new(ItemIdentifier::ExternalId("SKU".to_string()))
                    .set("UnitsQuantity", 3),
            ],
            save: None,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "transaction": {"UUID": "t"},
                "objects": [{"item": {"ExternalID": "SKU"}, "UnitsQuantity": 3}]
            })
        );
    }

    #[test]
    fn mixed_statuses_are_inspectable() {
        let result: UpdateResult = serde_json::from_value(json!({
            "result": [
                {"id": "a", "status": "updated", "message": ""},
                {"id": "b", "status": "failed", "message": "locked"},
                {"id": "c", "status": "added"}
            ]
        }))
        .unwrap();

        assert_eq!(result.len(), 3);
        assert!(!result.all_succeeded());
        let failed: Vec<_> = result.failures().map(|s| s.id.as_str()).collect();
        assert_eq!(failed, ["b"]);
        assert_eq!(result.result[2].message, "");
    }

    #[test]
    fn unknown_status_rejected() {
        let result: Result<UpdateStatus, _> =
            serde_json::from_value(json!({"id": "a", "status": "merged", "message": ""}));
        assert!(result.is_err());
    }
}
