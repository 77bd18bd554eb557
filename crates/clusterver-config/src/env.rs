use clusterver_core::RunConfig;
use tracing::debug;

use crate::Result;
use crate::error::ConfigError;

pub const CLUSTER_VERSION_VAR: &str = "CLUSTER_VERSION";
pub const MAJOR_TARGET_VAR: &str = "MAJOR_TARGET";
pub const MINOR_TARGET_VAR: &str = "MINOR_TARGET";
pub const UPGRADE_IMAGE_VAR: &str = "UPGRADE_IMAGE";
pub const UPGRADE_RELEASE_STREAM_VAR: &str = "UPGRADE_RELEASE_STREAM";
pub const UPGRADE_RELEASE_NAME_VAR: &str = "UPGRADE_RELEASE_NAME";

/// Applies overrides from the process environment.
///
/// # Errors
///
/// Returns an error if a target variable is set but not a number.
pub fn apply_process_env(config: &mut RunConfig) -> Result<()> {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Applies overrides read through `lookup`. Unset and empty values leave the
/// config untouched.
///
/// # Errors
///
/// Returns an error if a target variable is set but not a number.
pub fn apply_env_overrides<F>(config: &mut RunConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &'static str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(value) = get(CLUSTER_VERSION_VAR) {
        config.cluster_version = value;
    }
    if let Some(value) = get(MAJOR_TARGET_VAR) {
        config.major_target = parse_target(MAJOR_TARGET_VAR, &value)?;
    }
    if let Some(value) = get(MINOR_TARGET_VAR) {
        config.minor_target = parse_target(MINOR_TARGET_VAR, &value)?;
    }
    if let Some(value) = get(UPGRADE_IMAGE_VAR) {
        config.upgrade_image = value;
    }
    if let Some(value) = get(UPGRADE_RELEASE_STREAM_VAR) {
        config.upgrade_release_stream = value;
    }
    if let Some(value) = get(UPGRADE_RELEASE_NAME_VAR) {
        config.upgrade_release_name = value;
    }

    debug!(?config, "applied environment overrides");
    Ok(())
}

fn parse_target(var: &'static str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidTarget {
            var,
            value: value.to_string(),
            source,
        })
}
