//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty, trimmed identifiers)
//! so that once a value reaches the domain layer it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for non-empty string identifiers.
macro_rules! string_id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier ensuring it is trimmed and non-empty.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the identifier as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the owned inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_id_newtype!(LeadId, "Unique identifier for a lead.");
string_id_newtype!(OpportunityId, "Unique identifier for an opportunity.");

impl OpportunityId {
    /// Builds the time-based token used for freshly converted opportunities.
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(format!("opp-{millis}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_id_rejects_empty() {
        assert_eq!(LeadId::new(""), Err(TypeConstraintError::EmptyString));
        assert_eq!(LeadId::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn test_lead_id_trims() {
        let id = LeadId::new(" l1 ").unwrap();
        assert_eq!(id.as_str(), "l1");
    }

    #[test]
    fn test_opportunity_id_time_token() {
        let id = OpportunityId::from_timestamp_millis(1_700_000_000_000);
        assert_eq!(id.as_str(), "opp-1700000000000");
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = LeadId::new("l1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"l1\"");
        let back: LeadId = serde_json::from_str("\"l1\"").unwrap();
        assert_eq!(back, id);
    }
}
