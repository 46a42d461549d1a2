//! Reconcile command — load the session, resolve the target version, then
//! check and update every container agent in the cluster.

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::{ClusterApi, ReleaseSource};
use crate::application::services::reconcile::{ReconcileSummary, reconcile};
use crate::application::services::target_version::resolve_target_version;
use crate::domain::VersionSource;
use crate::infra::ecs::EcsClusterApi;
use crate::infra::release::GithubReleaseSource;
use crate::infra::session::load_session;
use crate::output::{TerminalReporter, progress};

/// Run the reconcile pass against real AWS and GitHub endpoints.
///
/// # Errors
///
/// Returns an error if the session cannot be created, the target version
/// cannot be resolved, or any cluster call fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let sdk = load_session(&app.config)
        .await
        .context("creating AWS session")?;
    let api = EcsClusterApi::new(&sdk);
    run_with(app, &api, &GithubReleaseSource::default())
        .await
        .map(|_| ())
}

/// Run the reconcile pass with injected cluster and release backends.
///
/// # Errors
///
/// Returns an error if the target version cannot be resolved or any cluster
/// call fails. Nothing is retried.
pub async fn run_with(
    app: &AppContext,
    api: &impl ClusterApi,
    releases: &impl ReleaseSource,
) -> Result<ReconcileSummary> {
    let config = &app.config;

    let looking_up = config.version_source == VersionSource::LatestRelease;
    let pb = progress::spinner_if(
        looking_up && app.output.show_progress(),
        "Looking up latest agent release...",
    );
    let target = resolve_target_version(&config.version_source, releases).await;
    pb.finish_and_clear();
    let target = target?;
    tracing::info!(cluster = %config.cluster, %target, mode = ?config.mode, "reconciling");

    let reporter = TerminalReporter::new(&app.output);
    let summary = reconcile(api, &reporter, &config.cluster, &target, config.mode).await?;

    tracing::info!(
        checked = summary.checked,
        outdated = summary.outdated.len(),
        up_to_date = summary.up_to_date,
        "reconcile finished"
    );
    Ok(summary)
}
