mod env;
mod error;
mod file;

use std::path::Path;

use clusterver_core::RunConfig;

pub use env::{
    CLUSTER_VERSION_VAR, MAJOR_TARGET_VAR, MINOR_TARGET_VAR, UPGRADE_IMAGE_VAR,
    UPGRADE_RELEASE_NAME_VAR, UPGRADE_RELEASE_STREAM_VAR, apply_env_overrides,
    apply_process_env,
};
pub use error::ConfigError;
pub use file::{parse_config, read_config_file};

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Builds the run configuration from an optional TOML file and the process
/// environment. Environment values take precedence over the file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a target
/// variable is not a number.
pub fn load_run_config(path: Option<&Path>) -> Result<RunConfig> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => RunConfig::default(),
    };
    apply_process_env(&mut config)?;
    Ok(config)
}
