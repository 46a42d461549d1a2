//! Cluster, instance and version value types plus the version comparison.
//!
//! Pure data in, data out. No I/O.

use std::fmt;

use crate::domain::error::ReleaseError;

/// Name or ARN of the cluster being reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterIdentifier(String);

impl ClusterIdentifier {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle (ARN) of a container instance within a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerInstanceRef(String);

impl ContainerInstanceRef {
    #[must_use]
    pub fn new(arn: impl Into<String>) -> Self {
        Self(arn.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerInstanceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of one container instance as returned by describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    /// The instance this snapshot belongs to.
    pub instance: ContainerInstanceRef,
    /// Agent version reported by the instance, `None` if it never reported one.
    pub agent_version: Option<String>,
}

impl InstanceDescriptor {
    #[must_use]
    pub fn new(instance: ContainerInstanceRef, agent_version: Option<String>) -> Self {
        Self {
            instance,
            agent_version,
        }
    }

    /// Returns `true` unless the reported version is byte-for-byte equal to `target`.
    #[must_use]
    pub fn needs_update(&self, target: &TargetVersion) -> bool {
        self.agent_version.as_deref() != Some(target.as_str())
    }
}

/// The agent version every instance should run.
///
/// Compared with exact string equality; `"v1.17.0"` and `"1.17.0"` differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion(String);

impl TargetVersion {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Derive the target version from a published release tag by stripping
    /// the leading `v`.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::EmptyTag`] if nothing remains after stripping.
    pub fn from_release_tag(tag: &str) -> Result<Self, ReleaseError> {
        let version = tag.trim().trim_start_matches('v');
        if version.is_empty() {
            return Err(ReleaseError::EmptyTag(tag.to_string()));
        }
        Ok(Self(version.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
