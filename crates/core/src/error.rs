//! Unified error types for datafix.
//!
//! Absence is not an error here: missing fields and type mismatches are
//! handled with `Option`-returning navigation on the tree itself and never
//! reach this taxonomy. What remains is registry misconfiguration (fatal at
//! registration time), fixer contract violations (fatal for one migration
//! call) and codec failures at the encoding seam.

use thiserror::Error;

/// All datafix errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A schema version id was registered twice
    #[error("schema version {version} already registered")]
    DuplicateVersion {
        /// The offending version id
        version: u32,
    },

    /// A fixer was registered under a version that differs from its own tag
    #[error("fixer '{fixer}' targets version {actual}, registered under {expected}")]
    FixerVersionMismatch {
        /// Name of the offending fixer
        fixer: String,
        /// Version the registry entry is keyed by
        expected: u32,
        /// Version the fixer itself carries
        actual: u32,
    },

    /// Migration target is not a registered schema version
    #[error("unknown schema version {version}")]
    UnknownVersion {
        /// The requested version id
        version: u32,
    },

    /// A fixer transform failed beyond its documented total contract
    #[error("fixer '{fixer}' failed: {cause}")]
    FixerFailure {
        /// Name of the failing fixer
        fixer: String,
        /// Underlying failure message
        cause: String,
    },

    /// Encoding or decoding failed at the codec seam
    #[error("codec error: {0}")]
    Codec(String),
}

/// Result type for datafix operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a registration-time configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::DuplicateVersion { .. } | Error::FixerVersionMismatch { .. }
        )
    }

    /// Check if this is a fixer contract violation.
    pub fn is_fixer_failure(&self) -> bool {
        matches!(self, Error::FixerFailure { .. })
    }
}
