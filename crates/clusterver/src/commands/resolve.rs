use std::path::{Path, PathBuf};

use clap::Args;
use clusterver_core::RunConfig;
use clusterver_operations::operations::ChooseVersionsOperation;
use clusterver_operations::providers::{CatalogProvider, ReleaseCatalog};
use tracing::debug;

use crate::error::Result;
use crate::output::{OutputFormat, ResolveReport};

#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Release catalog answering version and release stream lookups.
    /// Without it only a pinned cluster version can be resolved.
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Version to install, skipping all lookups
    #[arg(long)]
    cluster_version: Option<String>,

    #[arg(long)]
    major_target: Option<u32>,

    #[arg(long)]
    minor_target: Option<u32>,

    /// Image to upgrade to, skipping the release stream lookup
    #[arg(long)]
    upgrade_image: Option<String>,

    /// Release stream to upgrade into
    #[arg(long)]
    upgrade_release_stream: Option<String>,
}

impl ResolveArgs {
    fn apply_overrides(&self, config: &mut RunConfig) {
        if let Some(version) = &self.cluster_version {
            config.cluster_version.clone_from(version);
        }
        if let Some(major) = self.major_target {
            config.major_target = major;
        }
        if let Some(minor) = self.minor_target {
            config.minor_target = minor;
        }
        if let Some(image) = &self.upgrade_image {
            config.upgrade_image.clone_from(image);
        }
        if let Some(stream) = &self.upgrade_release_stream {
            config.upgrade_release_stream.clone_from(stream);
        }
    }
}

pub(crate) fn run(args: ResolveArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = clusterver_config::load_run_config(config_path)?;
    args.apply_overrides(&mut config);
    debug!(?config, "effective run configuration");

    let cluster_client = match &args.catalog {
        Some(path) => Some(CatalogProvider::load(path)?),
        None => None,
    };
    let release_publisher = match &cluster_client {
        Some(provider) => provider.clone(),
        None => CatalogProvider::new(ReleaseCatalog::default())?,
    };

    let operation = ChooseVersionsOperation::new(cluster_client.as_ref(), &release_publisher);
    let (result, resolution) = operation.execute(&mut config);

    let report = ResolveReport::new(&config, &resolution, result.as_ref().ok().copied());
    println!("{}", args.format.render(&report)?);

    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ResolveArgs {
        ResolveArgs {
            catalog: None,
            format: OutputFormat::Plain,
            cluster_version: None,
            major_target: None,
            minor_target: None,
            upgrade_image: None,
            upgrade_release_stream: None,
        }
    }

    #[test]
    fn unset_flags_keep_config_values() {
        let mut config = RunConfig {
            minor_target: 10,
            upgrade_release_stream: "fast-4.11".to_string(),
            ..RunConfig::default()
        };
        let expected = config.clone();

        args().apply_overrides(&mut config);

        assert_eq!(config, expected);
    }

    #[test]
    fn flags_override_config_values() {
        let mut config = RunConfig {
            minor_target: 10,
            upgrade_release_stream: "fast-4.11".to_string(),
            ..RunConfig::default()
        };
        let args = ResolveArgs {
            minor_target: Some(12),
            upgrade_image: Some("quay.io/foo:bar".to_string()),
            ..args()
        };

        args.apply_overrides(&mut config);

        assert_eq!(config.minor_target, 12);
        assert_eq!(config.upgrade_image, "quay.io/foo:bar");
        assert_eq!(config.upgrade_release_stream, "fast-4.11");
    }
}
