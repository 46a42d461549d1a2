//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::{ClusterIdentifier, ContainerInstanceRef, InstanceDescriptor, TargetVersion};

// ── Value Types ───────────────────────────────────────────────────────────────

/// An instance the describe call could not return, with the reason given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeFailure {
    /// The instance ARN the failure refers to, if reported.
    pub instance: Option<ContainerInstanceRef>,
    /// Reason string, e.g. `"MISSING"`.
    pub reason: String,
}

/// Result of a single batched describe call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeOutput {
    /// Descriptors in the order the API returned them.
    pub descriptors: Vec<InstanceDescriptor>,
    /// Instances the API could not describe.
    pub failures: Vec<DescribeFailure>,
}

// ── Cluster Port ──────────────────────────────────────────────────────────────

/// The three cluster-orchestration operations the reconciler consumes.
#[allow(async_fn_in_trait)]
pub trait ClusterApi {
    /// List every container instance registered to `cluster`.
    async fn list_container_instances(
        &self,
        cluster: &ClusterIdentifier,
    ) -> Result<Vec<ContainerInstanceRef>>;

    /// Describe `instances` in one batch request.
    async fn describe_container_instances(
        &self,
        cluster: &ClusterIdentifier,
        instances: &[ContainerInstanceRef],
    ) -> Result<DescribeOutput>;

    /// Ask the instance's agent to update itself to the latest version.
    async fn update_container_agent(
        &self,
        cluster: &ClusterIdentifier,
        instance: &ContainerInstanceRef,
    ) -> Result<()>;
}

// ── Release Port ──────────────────────────────────────────────────────────────

/// Source of the latest published agent release.
#[allow(async_fn_in_trait)]
pub trait ReleaseSource {
    /// Fetch the tag of the latest release, e.g. `"v1.18.0"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the release metadata cannot be fetched or parsed.
    async fn latest_release_tag(&self) -> Result<String>;
}

// ── Reporting Port ────────────────────────────────────────────────────────────

/// Per-instance notices emitted by the reconciler. Sync trait — no async needed.
pub trait ReconcileReporter {
    /// The instance is outdated and an update is being issued.
    fn updating(&self, instance: &ContainerInstanceRef, target: &TargetVersion);
    /// The instance is outdated but check-only mode leaves it alone.
    fn outdated(
        &self,
        instance: &ContainerInstanceRef,
        current: Option<&str>,
        target: &TargetVersion,
    );
    /// The instance already runs `target`.
    fn up_to_date(&self, instance: &ContainerInstanceRef, target: &TargetVersion);
}
