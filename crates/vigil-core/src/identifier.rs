//! # Identifier Newtypes
//!
//! Newtypes for the three identifier families the console handles:
//! monitored accounts, candidate regulations, and pending rulebook drafts.
//! All are backend-assigned opaque strings, validated to be non-empty at
//! construction time.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! string_identifier {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create the identifier from a string, validating non-emptiness.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyIdentifier`] if the string is
            /// empty or whitespace-only.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if s.trim().is_empty() {
                    return Err(ValidationError::EmptyIdentifier { kind: $kind });
                }
                Ok(Self(s))
            }

            /// Access the identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

string_identifier!(
    /// A monitored account identifier (e.g., `"user_001"`).
    UserId,
    "user id"
);

string_identifier!(
    /// A candidate regulation identifier (e.g., `"REG-7"` or
    /// `"MT-2025-REG-004"`), assigned by the regulation feed.
    RegulationId,
    "regulation id"
);

string_identifier!(
    /// A pending rulebook draft identifier, assigned by the backend when a
    /// push produces a draft awaiting human review.
    DraftId,
    "draft id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_accept_non_empty_strings() {
        assert_eq!(UserId::new("user_001").unwrap().as_str(), "user_001");
        assert_eq!(RegulationId::new("REG-7").unwrap().as_str(), "REG-7");
        assert_eq!(DraftId::new("d1").unwrap().as_str(), "d1");
    }

    #[test]
    fn identifiers_reject_empty_and_whitespace() {
        assert!(UserId::new("").is_err());
        assert!(RegulationId::new("   ").is_err());
        assert!(DraftId::new("\t").is_err());
    }

    #[test]
    fn identifiers_serialize_transparently() {
        let id = RegulationId::new("REG-7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"REG-7\"");
        let back: RegulationId = serde_json::from_str("\"REG-7\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn identifier_types_are_distinct() {
        // Compile-time property; the assertion just anchors the test.
        let user = UserId::new("x").unwrap();
        let draft = DraftId::new("x").unwrap();
        assert_eq!(user.as_str(), draft.as_str());
    }
}
