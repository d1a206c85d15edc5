//! Numeric identifiers used in endpoint paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Error};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw identifier.
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Parse an identifier from its decimal string form.
            ///
            /// # Errors
            ///
            /// Returns a configuration error if the string is empty or not a
            /// non-negative integer.
            pub fn parse(s: &str) -> Result<Self, Error> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ConfigError::MissingField { field: $field }.into());
                }
                s.parse::<u64>().map(Self).map_err(|e| {
                    ConfigError::InvalidField {
                        field: $field,
                        reason: format!("'{}' is not a numeric id: {}", s, e),
                    }
                    .into()
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a Podio app (the workspace schema items belong to).
    AppId,
    "app_id"
);

numeric_id!(
    /// Globally unique identifier of an item.
    ItemId,
    "item_id"
);

numeric_id!(
    /// App-local identifier of an item, unique only within its app.
    AppItemId,
    "app_item_id"
);
