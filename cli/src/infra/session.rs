//! AWS session loading from a shared credentials file.

use anyhow::{Context, Result};
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_runtime::env_config::file::{EnvConfigFileKind, EnvConfigFiles};
use aws_sdk_ecs::config::Region;

use crate::domain::{ConfigError, UpdaterConfig};

/// Build an authenticated AWS session for `config.region`.
///
/// Credentials come from `config.profile` in `config.credentials_file` only;
/// the default credential chain is not consulted. Credentials are resolved
/// here, so a bad file or profile fails before any cluster call.
///
/// # Errors
///
/// Returns an error if the file does not exist or the profile cannot supply
/// credentials.
pub async fn load_session(config: &UpdaterConfig) -> Result<SdkConfig> {
    let path = &config.credentials_file;
    if !path.is_file() {
        return Err(ConfigError::CredentialsFileMissing(path.display().to_string()).into());
    }

    let files = EnvConfigFiles::builder()
        .with_file(EnvConfigFileKind::Credentials, path.clone())
        .build();
    let provider = ProfileFileCredentialsProvider::builder()
        .profile_files(files)
        .profile_name(config.profile.clone())
        .build();

    provider.provide_credentials().await.with_context(|| {
        format!(
            "loading credentials for profile '{}' from {}",
            config.profile,
            path.display()
        )
    })?;
    tracing::debug!(profile = %config.profile, region = %config.region, "credentials loaded");

    Ok(aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(provider)
        .load()
        .await)
}
