//! Application service — bring every container agent in a cluster to the
//! target version.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::application::ports::{ClusterApi, DescribeOutput, ReconcileReporter};
use crate::domain::{
    ClusterIdentifier, ContainerInstanceRef, InstanceDescriptor, ReconcileMode, TargetVersion,
};

/// What a reconcile pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Number of instances compared against the target.
    pub checked: usize,
    /// Outdated instances in enumeration order. In `Apply` mode each of
    /// these received exactly one update call.
    pub outdated: Vec<ContainerInstanceRef>,
    /// Number of instances already at the target version.
    pub up_to_date: usize,
}

/// Run one reconcile pass over `cluster`.
///
/// Lists the cluster's container instances, describes them in a single batch,
/// and walks them in listing order. Every instance whose reported agent
/// version is not exactly `target` is reported and, in [`ReconcileMode::Apply`],
/// sent an update-agent request. Instances describe could not return are
/// logged and skipped. The first failing call ends the pass.
///
/// # Errors
///
/// Returns an error if listing, describing or any update call fails.
pub async fn reconcile(
    api: &impl ClusterApi,
    reporter: &impl ReconcileReporter,
    cluster: &ClusterIdentifier,
    target: &TargetVersion,
    mode: ReconcileMode,
) -> Result<ReconcileSummary> {
    let instances = api
        .list_container_instances(cluster)
        .await
        .with_context(|| format!("listing container instances in cluster {cluster}"))?;
    tracing::debug!(%cluster, count = instances.len(), "listed container instances");

    if instances.is_empty() {
        return Ok(ReconcileSummary::default());
    }

    let described = api
        .describe_container_instances(cluster, &instances)
        .await
        .with_context(|| format!("describing container instances in cluster {cluster}"))?;
    let descriptors = in_listing_order(&instances, described);

    let mut summary = ReconcileSummary {
        checked: descriptors.len(),
        ..ReconcileSummary::default()
    };

    for descriptor in descriptors {
        let instance = &descriptor.instance;
        if !descriptor.needs_update(target) {
            reporter.up_to_date(instance, target);
            summary.up_to_date += 1;
            continue;
        }

        match mode {
            ReconcileMode::Apply => {
                reporter.updating(instance, target);
                api.update_container_agent(cluster, instance)
                    .await
                    .with_context(|| format!("updating container agent on {instance}"))?;
                tracing::debug!(%instance, from = ?descriptor.agent_version, "update requested");
            }
            ReconcileMode::CheckOnly => {
                reporter.outdated(instance, descriptor.agent_version.as_deref(), target);
            }
        }
        summary.outdated.push(descriptor.instance);
    }

    Ok(summary)
}

/// Pair every listed instance with its descriptor, keeping listing order.
///
/// Instances without a descriptor (deregistered between list and describe,
/// for example) are dropped.
fn in_listing_order(
    instances: &[ContainerInstanceRef],
    described: DescribeOutput,
) -> Vec<InstanceDescriptor> {
    for failure in &described.failures {
        tracing::warn!(instance = ?failure.instance, reason = %failure.reason, "describe failure");
    }

    let by_ref: HashMap<ContainerInstanceRef, InstanceDescriptor> = described
        .descriptors
        .into_iter()
        .map(|d| (d.instance.clone(), d))
        .collect();

    instances
        .iter()
        .filter_map(|instance| {
            let descriptor = by_ref.get(instance).cloned();
            if descriptor.is_none() {
                tracing::warn!(%instance, "no description returned, skipping");
            }
            descriptor
        })
        .collect()
}
