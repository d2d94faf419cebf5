//! Search parameters and results.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{FieldList, Projection, Record, TransactionIdentifier};

use super::Filter;

/// One sort key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "Ascending")]
    pub ascending: bool,
}

impl Sort {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }
}

/// Parameters for a `search` operation.
///
/// ```
/// use cpi_core::{FieldList, Sort};
/// use cpi_core::model::SearchParams;
///
/// let params = SearchParams::new(FieldList::new(["Name"]).unwrap())
///     .page_size(10)
///     .sort_by(Sort::ascending("Name"));
/// assert_eq!(params.sorting.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub fields: FieldList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Vec<Sort>>,
}

impl SearchParams {
    pub fn new(fields: FieldList) -> Self {
        Self {
            fields,
            page: None,
            page_size: None,
            filter: None,
            sorting: None,
        }
    }

    /// Search parameters requesting exactly the fields of `P`.
    pub fn projecting<P: Projection>() -> Result<Self, Error> {
        Ok(Self::new(FieldList::of::<P>()?))
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Append a sort key; keys apply in the order they were added.
    pub fn sort_by(mut self, sort: Sort) -> Self {
        self.sorting.get_or_insert_with(Vec::new).push(sort);
        self
    }

    /// True if at least one sort key is present.
    pub fn is_sorted(&self) -> bool {
        self.sorting.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// Search over transaction lines, optionally narrowed by their parent transactions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLinesSearchParams {
    #[serde(flatten)]
    pub search: SearchParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_filter: Option<Filter>,
}

impl From<SearchParams> for TransactionLinesSearchParams {
    fn from(search: SearchParams) -> Self {
        Self {
            search,
            transaction_filter: None,
        }
    }
}

/// Search over the items in the scope of one transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderCenterSearchParams {
    pub transaction: TransactionIdentifier,
    #[serde(flatten)]
    pub search: SearchParams,
}

/// One page of projected records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T = Record> {
    pub objects: Vec<T>,
    pub count: u64,
    pub page: u32,
}
