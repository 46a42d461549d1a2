//! Release infrastructure — implements `ReleaseSource` using GitHub releases.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::ports::ReleaseSource;
use crate::domain::config::{AGENT_RELEASE_OWNER, AGENT_RELEASE_REPO};

/// Public GitHub REST endpoint.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Uses the GitHub "latest release" API to find the newest agent tag.
pub struct GithubReleaseSource {
    api_url: String,
    owner: String,
    repo: String,
}

impl GithubReleaseSource {
    /// Source for `owner/repo` served from `api_url`.
    #[must_use]
    pub fn new(api_url: &str, owner: &str, repo: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    fn latest_release_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, self.owner, self.repo
        )
    }
}

impl Default for GithubReleaseSource {
    fn default() -> Self {
        Self::new(GITHUB_API_URL, AGENT_RELEASE_OWNER, AGENT_RELEASE_REPO)
    }
}

impl ReleaseSource for GithubReleaseSource {
    /// # Errors
    ///
    /// This function will return an error if the request fails or the
    /// response carries no tag.
    async fn latest_release_tag(&self) -> Result<String> {
        let url = self.latest_release_url();
        let repo = format!("{}/{}", self.owner, self.repo);
        tracing::debug!(%url, "fetching latest release");

        tokio::task::spawn_blocking(move || fetch_tag(&url, &repo))
            .await
            .context("release lookup task failed")?
    }
}

fn fetch_tag(url: &str, repo: &str) -> Result<String> {
    let body = ureq::get(url)
        .set("Accept", "application/vnd.github+json")
        .set(
            "User-Agent",
            concat!("ecs-agent-updater/", env!("CARGO_PKG_VERSION")),
        )
        .call()
        .with_context(|| format!("failed to fetch latest release of {repo}"))?
        .into_string()
        .context("failed to read release metadata")?;

    parse_tag_name(&body)
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

pub(crate) fn parse_tag_name(body: &str) -> Result<String> {
    let release: LatestRelease =
        serde_json::from_str(body).context("invalid release metadata")?;
    Ok(release.tag_name)
}
