use std::fs;
use std::path::Path;

use clusterver_core::RunConfig;
use serde::Deserialize;
use tracing::debug;

use crate::Result;
use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    cluster_version: Option<String>,
    major_target: Option<u32>,
    minor_target: Option<u32>,
    upgrade_image: Option<String>,
    upgrade_release_stream: Option<String>,
    upgrade_release_name: Option<String>,
}

impl From<ConfigFile> for RunConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            cluster_version: file.cluster_version.unwrap_or_default(),
            major_target: file.major_target.unwrap_or_default(),
            minor_target: file.minor_target.unwrap_or_default(),
            upgrade_image: file.upgrade_image.unwrap_or_default(),
            upgrade_release_stream: file.upgrade_release_stream.unwrap_or_default(),
            upgrade_release_name: file.upgrade_release_name.unwrap_or_default(),
        }
    }
}

/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid config.
pub fn read_config_file(path: &Path) -> Result<RunConfig> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded run config file");
    parse_config(&content, path)
}

/// Parses config file contents. `path` is only used for error context.
///
/// # Errors
///
/// Returns an error if the content is not valid TOML or has unknown keys.
pub fn parse_config(content: &str, path: &Path) -> Result<RunConfig> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.into())
}
