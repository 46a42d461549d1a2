//! Domain types and validators for the updater configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::PathBuf;

use crate::domain::cluster::ClusterIdentifier;
use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Profile used when `--profile` is not given.
pub const DEFAULT_PROFILE: &str = "default";

/// GitHub owner of the upstream agent project.
pub const AGENT_RELEASE_OWNER: &str = "aws";

/// GitHub repository of the upstream agent project.
pub const AGENT_RELEASE_REPO: &str = "amazon-ecs-agent";

// ── Config schema ────────────────────────────────────────────────────────────

/// Where the target agent version comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Use this exact version string.
    Pinned(String),
    /// Use the latest published upstream release.
    LatestRelease,
}

/// Whether outdated instances are updated or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileMode {
    /// Issue an update for every outdated instance.
    #[default]
    Apply,
    /// Report outdated instances without touching them.
    CheckOnly,
}

/// Configuration for one reconcile run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// AWS region hosting the cluster.
    pub region: String,
    /// Cluster to reconcile.
    pub cluster: ClusterIdentifier,
    /// Shared credentials file.
    pub credentials_file: PathBuf,
    /// Profile inside the credentials file.
    pub profile: String,
    /// Target version strategy.
    pub version_source: VersionSource,
    /// Apply or check only.
    pub mode: ReconcileMode,
}

/// Raw, unvalidated inputs for [`UpdaterConfig::new`].
#[derive(Debug, Clone, Default)]
pub struct UpdaterConfigInput<'a> {
    pub region: &'a str,
    pub cluster: &'a str,
    pub credentials_file: &'a str,
    pub profile: &'a str,
    pub agent_version: Option<&'a str>,
    pub check_only: bool,
}

impl UpdaterConfig {
    /// Validate raw flag values and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value is blank or the pinned version is malformed.
    pub fn new(input: &UpdaterConfigInput<'_>) -> Result<Self, ConfigError> {
        let region = require("region", input.region)?;
        let cluster = require("cluster", input.cluster)?;
        let file = require("file", input.credentials_file)?;
        let profile = require("profile", input.profile)?;

        let version_source = match input.agent_version {
            Some(v) => VersionSource::Pinned(validate_pinned_version(v)?),
            None => VersionSource::LatestRelease,
        };

        Ok(Self {
            region: region.to_string(),
            cluster: ClusterIdentifier::new(cluster),
            credentials_file: credentials_path(file),
            profile: profile.to_string(),
            version_source,
            mode: if input.check_only {
                ReconcileMode::CheckOnly
            } else {
                ReconcileMode::Apply
            },
        })
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

fn require<'a>(flag: &'static str, value: &'a str) -> Result<&'a str, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Blank { flag });
    }
    Ok(trimmed)
}

/// Validates a pinned agent version.
///
/// The value is kept verbatim; only empty values and embedded whitespace are
/// refused since neither can ever match a reported version.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPinnedVersion`] for empty or whitespace-bearing values.
pub fn validate_pinned_version(version: &str) -> Result<String, ConfigError> {
    if version.is_empty() || version.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidPinnedVersion(version.to_string()));
    }
    Ok(version.to_string())
}

/// Turn the `--file` value into a filesystem path, accepting a `file://` URL.
#[must_use]
pub fn credentials_path(file: &str) -> PathBuf {
    PathBuf::from(file.strip_prefix("file://").unwrap_or(file))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
