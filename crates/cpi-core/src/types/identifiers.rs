//! Entity identifier types.
//!
//! Each identifier is a closed sum type with exactly one populated key. On the
//! wire an identifier is a single-key object such as `{"UUID": "..."}` or
//! `{"InternalID": 42}`. Parsing an untyped record rejects objects with no
//! recognised key or with more than one key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};

const UUID: &str = "UUID";
const INTERNAL_ID: &str = "InternalID";
const EXTERNAL_ID: &str = "ExternalID";
const NAME: &str = "Name";

/// Reference to a generic object (account, activity, line, attachment...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub enum ObjectIdentifier {
    #[serde(rename = "UUID")]
    Uuid(String),
    #[serde(rename = "InternalID")]
    InternalId(i64),
}

/// Reference to a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub enum TransactionIdentifier {
    #[serde(rename = "UUID")]
    Uuid(String),
    #[serde(rename = "InternalID")]
    InternalId(i64),
}

/// Reference to a catalogue item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub enum ItemIdentifier {
    #[serde(rename = "UUID")]
    Uuid(String),
    #[serde(rename = "InternalID")]
    InternalId(i64),
    #[serde(rename = "ExternalID")]
    ExternalId(String),
}

/// Reference to an entity type definition (e.g. a transaction type).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub enum TypeIdentifier {
    Name(String),
    #[serde(rename = "InternalID")]
    InternalId(i64),
}

/// Reference to a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub enum CatalogIdentifier {
    Name(String),
    #[serde(rename = "InternalID")]
    InternalId(i64),
    #[serde(rename = "UUID")]
    Uuid(String),
}

impl TryFrom<Value> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        const KIND: &str = "object";
        let (key, v) = single_key(KIND, &value, &[UUID, INTERNAL_ID])?;
        match key {
            UUID => Ok(Self::Uuid(string_value(KIND, key, v)?)),
            _ => Ok(Self::InternalId(id_value(KIND, key, v)?)),
        }
    }
}

impl TryFrom<Value> for TransactionIdentifier {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        const KIND: &str = "transaction";
        let (key, v) = single_key(KIND, &value, &[UUID, INTERNAL_ID])?;
        match key {
            UUID => Ok(Self::Uuid(string_value(KIND, key, v)?)),
            _ => Ok(Self::InternalId(id_value(KIND, key, v)?)),
        }
    }
}

impl TryFrom<Value> for ItemIdentifier {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        const KIND: &str = "item";
        let (key, v) = single_key(KIND, &value, &[UUID, INTERNAL_ID, EXTERNAL_ID])?;
        match key {
            UUID => Ok(Self::Uuid(string_value(KIND, key, v)?)),
            EXTERNAL_ID => Ok(Self::ExternalId(string_value(KIND, key, v)?)),
            _ => Ok(Self::InternalId(id_value(KIND, key, v)?)),
        }
    }
}

impl TryFrom<Value> for TypeIdentifier {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        const KIND: &str = "type";
        let (key, v) = single_key(KIND, &value, &[NAME, INTERNAL_ID])?;
        match key {
            NAME => Ok(Self::Name(string_value(KIND, key, v)?)),
            _ => Ok(Self::InternalId(id_value(KIND, key, v)?)),
        }
    }
}

impl TryFrom<Value> for CatalogIdentifier {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        const KIND: &str = "catalog";
        let (key, v) = single_key(KIND, &value, &[NAME, INTERNAL_ID, UUID])?;
        match key {
            NAME => Ok(Self::Name(string_value(KIND, key, v)?)),
            UUID => Ok(Self::Uuid(string_value(KIND, key, v)?)),
            _ => Ok(Self::InternalId(id_value(KIND, key, v)?)),
        }
    }
}

/// Finds the one recognised key of an identifier record.
fn single_key<'a>(
    kind: &'static str,
    value: &'a Value,
    known: &[&'static str],
) -> Result<(&'static str, &'a Value), Error> {
    let invalid =
        |reason: String| -> Error { InvalidInputError::Identifier { kind, reason }.into() };

    let map: &Map<String, Value> = value
        .as_object()
        .ok_or_else(|| invalid("must be a JSON object".to_string()))?;

    if let Some(unknown) = map.keys().find(|k| !known.contains(&k.as_str())) {
        return Err(invalid(format!(
            "unrecognised key '{}' (expected one of {})",
            unknown,
            known.join(", ")
        )));
    }

    match map.len() {
        0 => Err(invalid(format!("expected one of {}", known.join(", ")))),
        1 => {
            let (key, v) = map.iter().next().ok_or_else(|| invalid("empty".to_string()))?;
            let key = known
                .iter()
                .copied()
                .find(|k| *k == key)
                .ok_or_else(|| invalid(format!("unrecognised key '{}'", key)))?;
            Ok((key, v))
        }
        n => Err(invalid(format!("exactly one key must be set, found {}", n))),
    }
}

fn string_value(kind: &'static str, key: &str, value: &Value) -> Result<String, Error> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        InvalidInputError::Identifier {
            kind,
            reason: format!("{} must be a string", key),
        }
        .into()
    })
}

fn id_value(kind: &'static str, key: &str, value: &Value) -> Result<i64, Error> {
    value.as_i64().ok_or_else(|| {
        InvalidInputError::Identifier {
            kind,
            reason: format!("{} must be an integer", key),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_single_key_object() {
        let id = ObjectIdentifier::Uuid("abc".to_string());
        assert_eq!(serde_json::to_value(&id).unwrap(), json!({"UUID": "abc"}));

        let id = ItemIdentifier::ExternalId("SKU-1".to_string());
        assert_eq!(
            serde_json::to_value(&id).unwrap(),
            json!({"ExternalID": "SKU-1"})
        );

        let id = TypeIdentifier::InternalId(12);
        assert_eq!(serde_json::to_value(&id).unwrap(), json!({"InternalID": 12}));
    }

    #[test]
    fn parses_each_variant() {
        let id: CatalogIdentifier = serde_json::from_value(json!({"Name": "Default"})).unwrap();
        assert_eq!(id, CatalogIdentifier::Name("Default".to_string()));

        let id: TransactionIdentifier = serde_json::from_value(json!({"InternalID": 5})).unwrap();
        assert_eq!(id, TransactionIdentifier::InternalId(5));

        let id = ItemIdentifier::try_from(json!({"UUID": "u"})).unwrap();
        assert_eq!(id, ItemIdentifier::Uuid("u".to_string()));
    }

    #[test]
    fn rejects_several_keys() {
        let err = ObjectIdentifier::try_from(json!({"UUID": "a", "InternalID": 1})).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::Identifier { kind: "object", .. })
        ));
    }

    #[test]
    fn rejects_no_keys() {
        assert!(ObjectIdentifier::try_from(json!({})).is_err());
        assert!(ObjectIdentifier::try_from(json!("abc")).is_err());
    }

    #[test]
    fn rejects_key_of_other_kind() {
        // ExternalID is only valid for items.
        assert!(ObjectIdentifier::try_from(json!({"ExternalID": "x"})).is_err());
        assert!(ItemIdentifier::try_from(json!({"ExternalID": "x"})).is_ok());
    }

    #[test]
    fn rejects_wrong_value_type() {
        assert!(ObjectIdentifier::try_from(json!({"InternalID": "12"})).is_err());
        assert!(TypeIdentifier::try_from(json!({"Name": 3})).is_err());
    }
}
