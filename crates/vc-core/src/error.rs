//! Workspace error type for kind parsing.
//!
//! Sub-crates define their own error enums (`ConfigError`, `ScanError`, …).
//! The config loader does not fail on a bad kind name: it skips the entry and
//! logs the `VcError` text.

use thiserror::Error;

/// Errors raised while converting external names into `vc-core` kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VcError {
    #[error("unknown entity type {0:?}")]
    UnknownEntityType(String),

    #[error("unknown boat wood {0:?}")]
    UnknownBoatWood(String),
}

/// Shorthand result type for `vc-core` parsing.
pub type VcResult<T> = Result<T, VcError>;
