//! Field projection types.
//!
//! `get` and `search` operations ask the bridge for a subset of an entity's
//! fields. The requested list travels as a [`FieldList`]; results come back
//! either as open [`Record`]s or as a caller type implementing [`Projection`].
//!
//! The bridge is trusted to honour the projection. Results are not re-checked
//! against the requested list; [`Record::is_projection_of`] is there for
//! callers who want to.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Index;

use crate::error::{Error, InvalidInputError};

/// A validated, non-empty, ordered list of field names to project.
///
/// # Example
///
/// ```
/// use cpi_core::FieldList;
///
/// let fields = FieldList::new(["Name", "InternalID"]).unwrap();
/// assert_eq!(fields.len(), 2);
/// assert!(FieldList::new(Vec::<String>::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FieldList(Vec<String>);

impl FieldList {
    /// Create a field list, rejecting an empty list or empty names.
    pub fn new<I, S>(fields: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        Self::validate(&fields)?;
        Ok(Self(fields))
    }

    /// Field list declared by a [`Projection`] type.
    pub fn of<P: Projection>() -> Result<Self, Error> {
        Self::new(P::FIELDS.iter().copied())
    }

    /// Parse a comma-separated list (`"Name,InternalID"`).
    pub fn parse_csv(s: &str) -> Result<Self, Error> {
        Self::new(s.split(',').map(str::trim).filter(|f| !f.is_empty()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    fn validate(fields: &[String]) -> Result<(), Error> {
        if fields.is_empty() {
            return Err(InvalidInputError::Fields {
                reason: "at least one field is required".to_string(),
            }
            .into());
        }
        if let Some(i) = fields.iter().position(|f| f.trim().is_empty()) {
            return Err(InvalidInputError::Fields {
                reason: format!("field {} is empty", i + 1),
            }
            .into());
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for FieldList {
    type Error = Error;

    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<FieldList> for Vec<String> {
    fn from(fields: FieldList) -> Self {
        fields.0
    }
}

/// A caller-defined record shape with a fixed field list.
///
/// Implementing this for a struct ties the requested fields to the type the
/// results are read into, so the projection and the result shape cannot drift.
///
/// ```
/// use cpi_core::Projection;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct AccountName {
///     #[serde(rename = "Name")]
///     name: String,
/// }
///
/// impl Projection for AccountName {
///     const FIELDS: &'static [&'static str] = &["Name"];
/// }
/// ```
pub trait Projection: DeserializeOwned {
    /// Field names requested from the bridge, in order.
    const FIELDS: &'static [&'static str];
}

static NULL: Value = Value::Null;

/// An open entity record: field name to JSON value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every key of this record was requested in `fields`.
    pub fn is_projection_of(&self, fields: &FieldList) -> bool {
        self.keys().all(|k| fields.contains(k))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl Index<&str> for Record {
    type Output = Value;

    /// Missing fields read as `null`.
    fn index(&self, field: &str) -> &Value {
        self.0.get(field).unwrap_or(&NULL)
    }
}
