//! Tests for the `reconcile` application service.
//!
//! Drives `reconcile()` with a recording cluster and reporter and checks which
//! remote calls were issued, in which order, and what was reported.

#![allow(clippy::expect_used)]

use ecs_agent_updater::application::services::reconcile::reconcile;
use ecs_agent_updater::domain::{ClusterIdentifier, ReconcileMode, TargetVersion};

use crate::mocks::{FailOn, Notice, RecordingCluster, RecordingReporter};

fn cluster() -> ClusterIdentifier {
    ClusterIdentifier::new("prod")
}

fn target() -> TargetVersion {
    TargetVersion::new("1.17.0")
}

#[tokio::test]
async fn test_reconcile_updates_only_the_outdated_instance() {
    let api = RecordingCluster::with_versions(&[Some("1.17.0"), Some("1.16.0"), Some("1.17.0")]);
    let reporter = RecordingReporter::default();

    let summary = reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect("reconcile succeeds");

    assert_eq!(api.updates(), vec![api.instance(1)]);
    assert_eq!(
        reporter.notices(),
        vec![
            Notice::UpToDate(api.instance(0)),
            Notice::Updating(api.instance(1)),
            Notice::UpToDate(api.instance(2)),
        ]
    );
    assert_eq!(summary.checked, 3);
    assert_eq!(summary.up_to_date, 2);
    assert_eq!(summary.outdated, vec![api.instance(1)]);
}

#[tokio::test]
async fn test_reconcile_empty_cluster_skips_describe_and_reports_nothing() {
    let api = RecordingCluster::with_versions(&[]);
    let reporter = RecordingReporter::default();

    let summary = reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect("empty cluster is not an error");

    assert_eq!(api.list_count(), 1);
    assert_eq!(api.describe_count(), 0);
    assert!(api.updates().is_empty());
    assert!(reporter.notices().is_empty());
    assert_eq!(summary.checked, 0);
}

#[tokio::test]
async fn test_reconcile_describes_all_listed_instances_in_one_call() {
    let api = RecordingCluster::with_versions(&[Some("1.17.0"), Some("1.17.0"), Some("1.17.0")]);
    let reporter = RecordingReporter::default();

    reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect("reconcile succeeds");

    assert_eq!(
        api.described(),
        vec![vec![api.instance(0), api.instance(1), api.instance(2)]]
    );
}

#[tokio::test]
async fn test_reconcile_every_mismatch_is_updated_in_listing_order() {
    let api = RecordingCluster::with_versions(&[
        Some("v1.17.0"),
        Some("1.17.0"),
        Some("1.17.0 "),
        None,
        Some("1.18.0"),
    ])
    .reversed_describe();
    let reporter = RecordingReporter::default();

    reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect("reconcile succeeds");

    assert_eq!(
        api.updates(),
        vec![api.instance(0), api.instance(2), api.instance(3), api.instance(4)]
    );
}

#[tokio::test]
async fn test_reconcile_second_run_after_convergence_issues_no_updates() {
    let api = RecordingCluster::with_versions(&[Some("1.17.0"), Some("1.17.0")]);
    let reporter = RecordingReporter::default();

    for _ in 0..2 {
        reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
            .await
            .expect("reconcile succeeds");
    }

    assert!(api.updates().is_empty());
    assert_eq!(reporter.notices().len(), 4);
}

#[tokio::test]
async fn test_reconcile_list_failure_stops_before_describe() {
    let api = RecordingCluster::with_versions(&[Some("1.16.0")]).failing_on(FailOn::List);
    let reporter = RecordingReporter::default();

    let err = reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect_err("list failure is fatal");

    assert!(err.to_string().contains("listing container instances"), "got: {err}");
    assert_eq!(api.describe_count(), 0);
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn test_reconcile_describe_failure_issues_no_updates() {
    let api = RecordingCluster::with_versions(&[Some("1.16.0"), Some("1.15.0")])
        .failing_on(FailOn::Describe);
    let reporter = RecordingReporter::default();

    let err = reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect_err("describe failure is fatal");

    assert!(format!("{err:#}").contains("AccessDeniedException"), "got: {err:#}");
    assert!(api.updates().is_empty());
    assert!(reporter.notices().is_empty());
}

#[tokio::test]
async fn test_reconcile_update_failure_stops_remaining_instances() {
    let api = RecordingCluster::with_versions(&[Some("1.16.0"), Some("1.16.0"), Some("1.16.0")])
        .failing_on(FailOn::Update(1));
    let reporter = RecordingReporter::default();

    let err = reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect_err("update failure is fatal");

    assert!(err.to_string().contains(api.instance(1).as_str()), "got: {err}");
    assert_eq!(api.updates(), vec![api.instance(0)]);
    assert_eq!(
        reporter.notices(),
        vec![
            Notice::Updating(api.instance(0)),
            Notice::Updating(api.instance(1)),
        ]
    );
}

#[tokio::test]
async fn test_reconcile_instance_missing_from_describe_is_skipped() {
    let api = RecordingCluster::with_versions(&[Some("1.16.0"), Some("1.16.0"), Some("1.16.0")])
        .missing_from_describe(2);
    let reporter = RecordingReporter::default();

    let summary = reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect("describe failure entries are not fatal");

    assert_eq!(api.updates(), vec![api.instance(0), api.instance(1)]);
    assert_eq!(
        reporter.notices(),
        vec![
            Notice::Updating(api.instance(0)),
            Notice::Updating(api.instance(1)),
        ]
    );
    assert_eq!(summary.checked, 2);
}

#[tokio::test]
async fn test_reconcile_skipped_instance_keeps_listing_order_of_the_rest() {
    let api = RecordingCluster::with_versions(&[Some("1.16.0"), Some("1.16.0"), Some("1.16.0")])
        .missing_from_describe(1)
        .reversed_describe();
    let reporter = RecordingReporter::default();

    reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::Apply)
        .await
        .expect("reconcile succeeds");

    assert_eq!(api.updates(), vec![api.instance(0), api.instance(2)]);
}

#[tokio::test]
async fn test_reconcile_check_only_reports_without_updating() {
    let api = RecordingCluster::with_versions(&[Some("1.16.0"), Some("1.17.0"), None]);
    let reporter = RecordingReporter::default();

    let summary = reconcile(&api, &reporter, &cluster(), &target(), ReconcileMode::CheckOnly)
        .await
        .expect("reconcile succeeds");

    assert!(api.updates().is_empty());
    assert_eq!(
        reporter.notices(),
        vec![
            Notice::Outdated(api.instance(0), Some("1.16.0".to_string())),
            Notice::UpToDate(api.instance(1)),
            Notice::Outdated(api.instance(2), None),
        ]
    );
    assert_eq!(summary.outdated, vec![api.instance(0), api.instance(2)]);
}

#[tokio::test]
async fn test_reconcile_passes_cluster_to_list_call() {
    let api = RecordingCluster::with_versions(&[]);
    let reporter = RecordingReporter::default();

    reconcile(
        &api,
        &reporter,
        &ClusterIdentifier::new("staging"),
        &target(),
        ReconcileMode::Apply,
    )
    .await
    .expect("reconcile succeeds");

    assert_eq!(api.listed_clusters(), vec!["staging".to_string()]);
}
