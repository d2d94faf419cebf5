//! Bridge endpoint URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::HttpBridgeError;

/// A validated bridge endpoint.
///
/// Must be an absolute `https` URL; plain `http` is accepted for loopback
/// hosts only.
///
/// ```
/// use cpi_http::BridgeUrl;
///
/// let url = BridgeUrl::new("https://bridge.example.com/cpi/").unwrap();
/// assert_eq!(url.as_str(), "https://bridge.example.com/cpi");
///
/// assert!(BridgeUrl::new("http://bridge.example.com").is_err());
/// assert!(BridgeUrl::new("http://127.0.0.1:8080").is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BridgeUrl(Url);

impl BridgeUrl {
    /// Parse and validate an endpoint. A trailing slash is dropped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, HttpBridgeError> {
        let s = s.as_ref();
        let mut url = Url::parse(s).map_err(|e| HttpBridgeError::InvalidUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        if url.path().len() > 1 && url.path().ends_with('/') {
            let trimmed = url.path().trim_end_matches('/').to_string();
            url.set_path(&trimmed);
        }

        Ok(Self(url))
    }

    /// The endpoint as a string, without a trailing slash on the root path.
    pub fn as_str(&self) -> &str {
        let s = self.0.as_str();
        if self.0.path() == "/" && self.0.query().is_none() {
            s.trim_end_matches('/')
        } else {
            s
        }
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// True if the endpoint is on this machine.
    pub fn is_loopback(&self) -> bool {
        is_loopback_host(&self.0)
    }

    fn validate(url: &Url, original: &str) -> Result<(), HttpBridgeError> {
        let invalid = |reason: &str| HttpBridgeError::InvalidUrl {
            value: original.to_string(),
            reason: reason.to_string(),
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        match url.scheme() {
            "https" => Ok(()),
            "http" if is_loopback_host(url) => Ok(()),
            _ => Err(invalid("must use HTTPS (HTTP allowed only for loopback hosts)")),
        }
    }
}

fn is_loopback_host(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]")
}

impl fmt::Display for BridgeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BridgeUrl {
    type Err = HttpBridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BridgeUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BridgeUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BridgeUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BridgeUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_accepted() {
        let url = BridgeUrl::new("https://bridge.example.com").unwrap();
        assert_eq!(url.host(), Some("bridge.example.com"));
        assert_eq!(url.as_str(), "https://bridge.example.com");
        assert!(!url.is_loopback());
    }

    #[test]
    fn http_only_for_loopback() {
        assert!(BridgeUrl::new("http://localhost:3000/cpi").unwrap().is_loopback());
        assert!(BridgeUrl::new("http://127.0.0.1:3000").is_ok());
        assert!(BridgeUrl::new("http://[::1]:3000").is_ok());

        let err = BridgeUrl::new("http://bridge.example.com").unwrap_err();
        assert!(matches!(err, HttpBridgeError::InvalidUrl { .. }));
    }

    #[test]
    fn other_schemes_rejected() {
        assert!(BridgeUrl::new("ftp://bridge.example.com").is_err());
        assert!(BridgeUrl::new("file:///tmp/bridge").is_err());
        assert!(BridgeUrl::new("mailto:ops@example.com").is_err());
        assert!(BridgeUrl::new("not a url").is_err());
    }

    #[test]
    fn trailing_slash_dropped() {
        let url = BridgeUrl::new("https://bridge.example.com/cpi/").unwrap();
        assert_eq!(url.as_str(), "https://bridge.example.com/cpi");
        assert_eq!(url.to_string(), "https://bridge.example.com/cpi");
    }

    #[test]
    fn serde_validates() {
        let url: BridgeUrl = serde_json::from_str("\"https://bridge.example.com\"").unwrap();
        assert_eq!(
            serde_json::to_string(&url).unwrap(),
            "\"https://bridge.example.com\""
        );
        assert!(serde_json::from_str::<BridgeUrl>("\"http://example.com\"").is_err());
    }
}
