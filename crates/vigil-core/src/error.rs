//! # Error Hierarchy
//!
//! Structured validation errors for the console's domain primitives,
//! built with `thiserror`. Each variant carries the invalid input and the
//! expected format so that operators can diagnose misconfiguration
//! without guesswork.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// An identifier newtype was constructed from an empty string.
    #[error("invalid {kind}: must be non-empty")]
    EmptyIdentifier {
        /// Which identifier type rejected the input (e.g., "regulation id").
        kind: &'static str,
    },

    /// A jurisdiction code outside the monitored set.
    #[error("unknown jurisdiction code: \"{0}\" (expected one of MT, AE, KY)")]
    UnknownJurisdiction(String),
}
