//! Application service — decide which agent version the cluster should run.

use anyhow::{Context, Result};

use crate::application::ports::ReleaseSource;
use crate::domain::{TargetVersion, VersionSource};

/// Resolve the configured [`VersionSource`] into a comparable [`TargetVersion`].
///
/// A pinned version is used as given and the release source is not consulted.
/// Otherwise the latest release tag is fetched and its leading `v` stripped.
///
/// # Errors
///
/// Returns an error if the release lookup fails or yields an empty tag.
pub async fn resolve_target_version(
    source: &VersionSource,
    releases: &impl ReleaseSource,
) -> Result<TargetVersion> {
    match source {
        VersionSource::Pinned(version) => Ok(TargetVersion::new(version.clone())),
        VersionSource::LatestRelease => {
            let tag = releases
                .latest_release_tag()
                .await
                .context("looking up latest agent release")?;
            let target = TargetVersion::from_release_tag(&tag)?;
            tracing::debug!(%tag, %target, "resolved latest agent release");
            Ok(target)
        }
    }
}
