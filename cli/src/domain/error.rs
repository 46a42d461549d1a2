//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while validating the updater configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--{flag} must not be empty")]
    Blank { flag: &'static str },

    #[error("Credentials file not found: {0}")]
    CredentialsFileMissing(String),

    #[error("Invalid agent version '{0}': must not be empty or contain whitespace")]
    InvalidPinnedVersion(String),
}

// ── Release errors ────────────────────────────────────────────────────────────

/// Errors related to resolving the target version from a release tag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("Release tag '{0}' does not contain a version")]
    EmptyTag(String),
}
