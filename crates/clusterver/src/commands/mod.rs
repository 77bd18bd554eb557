mod resolve;

use std::path::Path;

use clap::Subcommand;

use crate::error::Result;

use resolve::ResolveArgs;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Resolve the cluster version to install and the version to upgrade to
    Resolve(ResolveArgs),
}

impl Commands {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<()> {
        match self {
            Self::Resolve(args) => resolve::run(args, config_path),
        }
    }
}
