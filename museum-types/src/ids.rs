//! Identifier types for the museum entity hierarchy.
//!
//! Ids are opaque strings minted by the store's id generator. Keeping
//! them as strings (rather than raw UUIDs) lets the seed dataset use
//! readable slugs and lets tests inject deterministic values.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an already-minted identifier value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

string_id! {
    /// Unique identifier of an [`Exhibition`](crate::Exhibition).
    ExhibitionId
}

string_id! {
    /// Unique identifier of an [`ExhibitItem`](crate::ExhibitItem).
    ExhibitItemId
}

string_id! {
    /// Unique identifier of a [`Photo`](crate::Photo).
    PhotoId
}
