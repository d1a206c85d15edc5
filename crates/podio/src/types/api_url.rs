//! Validated base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{ConfigError, Error};

/// A validated base URL for the Podio API or its token endpoint.
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for localhost),
/// and is normalized so endpoint paths can be appended directly.
///
/// # Example
///
/// ```
/// use podio::ApiUrl;
///
/// let api = ApiUrl::new("https://api.podio.com/").unwrap();
/// assert_eq!(api.join("/item/42"), "https://api.podio.com/item/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL is not valid or doesn't meet
    /// requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for an endpoint path beginning with `/`.
    ///
    /// An empty path yields the URL itself, trailing slash included.
    pub fn join(&self, path: &str) -> String {
        let base = self.as_str();
        if path.starts_with('/') {
            format!("{}{}", base.strip_suffix('/').unwrap_or(base), path)
        } else {
            format!("{}{}", base, path)
        }
    }

    /// Returns the URL as a string. A root path is rendered without its
    /// trailing slash; any other path is kept verbatim.
    pub fn as_str(&self) -> &str {
        let s = self.0.as_str();
        if self.0.path() == "/" {
            // Url always renders a root path as "/"
            s.strip_suffix('/').unwrap_or(s)
        } else {
            s
        }
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(ConfigError::InvalidUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(ConfigError::InvalidUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::InvalidUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
