//! Client configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Whether `search` operations must carry at least one sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortingPolicy {
    /// Sorting may be omitted; the bridge picks its own order.
    #[default]
    Optional,
    /// A search without sort keys is rejected before the bridge is called.
    Required,
}

impl SortingPolicy {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortingPolicy::Optional => "optional",
            SortingPolicy::Required => "required",
        }
    }
}

impl fmt::Display for SortingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "optional" => Ok(SortingPolicy::Optional),
            "required" => Ok(SortingPolicy::Required),
            _ => Err(InvalidInputError::Sorting {
                operation: "*".to_string(),
                reason: format!("unknown sorting policy '{}'", s),
            }
            .into()),
        }
    }
}

/// Settings applied to every operation of a [`ClientApi`](crate::ClientApi).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub sorting: SortingPolicy,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorting(mut self, sorting: SortingPolicy) -> Self {
        self.sorting = sorting;
        self
    }
}
