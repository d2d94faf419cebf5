//! User-defined tables: a two-level keyed store of string values.

use serde::{Deserialize, Serialize};

/// Read one value by table, main key and secondary key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtGetParams {
    pub table: String,
    pub main_key: String,
    pub secondary_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// The stored value; empty if the key is absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdtGetResult {
    pub value: String,
}

/// List entries of a table, optionally narrowed by either key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtGetListParams {
    pub table: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_key: Option<String>,
}

/// One stored row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtEntry {
    pub main_key: String,
    pub secondary_key: String,
    pub value: String,
}

/// Rows of a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdtGetListResult {
    pub objects: Vec<UdtEntry>,
}

/// Insert or replace one value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtUpsertParams {
    pub table: String,
    pub main_key: String,
    pub secondary_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    pub value: String,
}
