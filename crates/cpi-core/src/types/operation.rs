//! Operation name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The fixed root segment of every operation name.
pub const ROOT: &str = "pepperi";

/// Access scope of an operation.
///
/// `api` exposes reads and writes across all entities; `app` exposes only
/// the mutation entry points available to the app calling context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Api,
    App,
}

impl Scope {
    /// Returns the segment used in operation names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Api => "api",
            Scope::App => "app",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "api" => Ok(Scope::Api),
            "app" => Ok(Scope::App),
            other => Err(InvalidInputError::OperationName {
                value: other.to_string(),
                reason: "scope must be 'api' or 'app'".to_string(),
            }
            .into()),
        }
    }
}

/// A validated dotted operation name, e.g. `pepperi.api.accounts.search`.
///
/// This string is the wire-level contract with the bridge: it is placed in the
/// `function` field of every outgoing parameter record.
///
/// # Example
///
/// ```
/// use cpi_core::{OperationName, Scope};
///
/// let name = OperationName::new("pepperi.app.contacts.add").unwrap();
/// assert_eq!(name.scope(), Scope::App);
/// assert_eq!(name.entity(), "contacts");
/// assert_eq!(name.verb(), "add");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperationName {
    name: String,
    scope: Scope,
}

impl OperationName {
    /// Create a new operation name from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error unless the string has the form
    /// `pepperi.<api|app>.<entity>.<verb>` with alphanumeric segments.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let name = s.into();
        let scope = Self::validate(&name)?;
        Ok(Self { name, scope })
    }

    /// Build a name from its parts.
    pub fn from_parts(scope: Scope, entity: &str, verb: &str) -> Result<Self, Error> {
        Self::new(format!("{ROOT}.{scope}.{entity}.{verb}"))
    }

    /// Returns the access scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the entity segment, e.g. `transactionLines`.
    pub fn entity(&self) -> &str {
        self.segment(2)
    }

    /// Returns the verb segment, e.g. `search`.
    pub fn verb(&self) -> &str {
        self.segment(3)
    }

    /// Returns the full name.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    fn segment(&self, index: usize) -> &str {
        self.name.split('.').nth(index).unwrap_or_default()
    }

    fn validate(s: &str) -> Result<Scope, Error> {
        let invalid = |reason: String| -> Error {
            InvalidInputError::OperationName {
                value: s.to_string(),
                reason,
            }
            .into()
        };

        let segments: Vec<&str> = s.split('.').collect();
        if segments.len() != 4 {
            return Err(invalid(
                "must have exactly 4 segments (e.g., 'pepperi.api.accounts.get')".to_string(),
            ));
        }

        if segments[0] != ROOT {
            return Err(invalid(format!("must start with '{ROOT}.'")));
        }

        let scope: Scope = segments[1]
            .parse()
            .map_err(|_| invalid(format!("unknown scope '{}'", segments[1])))?;

        for segment in &segments[2..] {
            let Some(first) = segment.chars().next() else {
                return Err(invalid("segment is empty".to_string()));
            };
            if !first.is_ascii_alphabetic() {
                return Err(invalid(format!("segment '{}' must start with a letter", segment)));
            }
            if let Some(c) = segment.chars().find(|c| !c.is_ascii_alphanumeric()) {
                return Err(invalid(format!(
                    "segment '{}' contains invalid character '{}'",
                    segment, c
                )));
            }
        }

        Ok(scope)
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for OperationName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OperationName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<OperationName> for String {
    fn from(name: OperationName) -> Self {
        name.name
    }
}

impl AsRef<str> for OperationName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        let name = OperationName::new("pepperi.api.transactionLines.search").unwrap();
        assert_eq!(name.scope(), Scope::Api);
        assert_eq!(name.entity(), "transactionLines");
        assert_eq!(name.verb(), "search");
    }

    #[test]
    fn from_parts_round_trips() {
        let name = OperationName::from_parts(Scope::App, "accounts", "add").unwrap();
        assert_eq!(name.as_str(), "pepperi.app.accounts.add");
    }

    #[test]
    fn invalid_segment_count() {
        assert!(OperationName::new("pepperi.api.accounts").is_err());
        assert!(OperationName::new("pepperi.api.accounts.get.more").is_err());
    }

    #[test]
    fn invalid_root_or_scope() {
        assert!(OperationName::new("other.api.accounts.get").is_err());
        assert!(OperationName::new("pepperi.web.accounts.get").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(OperationName::new("pepperi.api..get").is_err());
        assert!(OperationName::new("pepperi.api.1accounts.get").is_err());
        assert!(OperationName::new("pepperi.api.accounts.get-all").is_err());
    }

    #[test]
    fn serde_validates() {
        let ok: OperationName = serde_json::from_str("\"pepperi.api.items.get\"").unwrap();
        assert_eq!(ok.entity(), "items");
        let bad: Result<OperationName, _> = serde_json::from_str("\"pepperi.items\"");
        assert!(bad.is_err());
    }
}
