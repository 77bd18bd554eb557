use std::path::PathBuf;

use clusterver_core::{ServiceError, VersionTarget};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    /// Version strings that cannot be compared are reported as-is.
    #[error(transparent)]
    Version(#[from] clusterver_version::VersionError),

    #[error("cluster client required for upgrade-stream resolution")]
    MissingClusterClient,

    #[error("failed to find latest cluster version for target {target}")]
    FamilyLookup {
        target: VersionTarget,
        #[source]
        source: ServiceError,
    },

    #[error("failed to find default cluster version")]
    DefaultLookup(#[source] ServiceError),

    #[error("couldn't get latest release from release stream '{stream}'")]
    LatestRelease {
        stream: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed retrieving previous version to '{release}'")]
    PreviousVersion {
        release: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed to read release catalog '{path}'")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse release catalog '{path}'")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid version in release catalog")]
    CatalogVersion(#[source] clusterver_version::VersionError),
}

pub type Result<T> = std::result::Result<T, OperationError>;
