use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use clusterver_core::{ReleaseInfo, RunConfig, ServiceError, VersionTarget};
use clusterver_version::openshift_to_semver;
use semver::Version;
use serde::Deserialize;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ReleasePublisher, VersionRanker};

/// Snapshot of installable versions and release streams.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseCatalog {
    pub default: Option<String>,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub streams: BTreeMap<String, StreamEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamEntry {
    pub latest: String,
    #[serde(default)]
    pub image: String,
}

/// Serves both version services from a [`ReleaseCatalog`].
///
/// Versions are ordered semantically, so `4.10.0` ranks above `4.9.12`.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    catalog: ReleaseCatalog,
    ranked: Vec<(Version, String)>,
}

impl CatalogProvider {
    /// # Errors
    ///
    /// Returns an error if a listed version cannot be parsed.
    pub fn new(catalog: ReleaseCatalog) -> Result<Self> {
        let mut ranked = catalog
            .versions
            .iter()
            .map(|name| {
                openshift_to_semver(name)
                    .map(|version| (version, name.clone()))
                    .map_err(OperationError::CatalogVersion)
            })
            .collect::<Result<Vec<_>>>()?;
        ranked.sort_by(|(a, _), (b, _)| a.cmp_precedence(b));

        Ok(Self { catalog, ranked })
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid catalog,
    /// or lists an unparseable version.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| OperationError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: ReleaseCatalog =
            toml::from_str(&content).map_err(|source| OperationError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            path = %path.display(),
            versions = catalog.versions.len(),
            streams = catalog.streams.len(),
            "loaded release catalog"
        );
        Self::new(catalog)
    }

    #[must_use]
    pub fn catalog(&self) -> &ReleaseCatalog {
        &self.catalog
    }
}

impl VersionRanker for CatalogProvider {
    fn latest_version(&self, target: &VersionTarget) -> clusterver_core::Result<String> {
        self.ranked
            .iter()
            .rev()
            .find(|(version, _)| target.matches(version))
            .map(|(_, name)| name.clone())
            .ok_or_else(|| ServiceError::NotFound(format!("version matching {target}")))
    }

    fn default_version(&self) -> clusterver_core::Result<String> {
        self.catalog
            .default
            .clone()
            .ok_or_else(|| ServiceError::NotFound("default version".to_string()))
    }

    fn previous_version(&self, version: &str) -> clusterver_core::Result<String> {
        let current = openshift_to_semver(version)
            .map_err(|err| ServiceError::InvalidRequest(err.to_string()))?;

        self.ranked
            .iter()
            .rev()
            .find(|(candidate, _)| candidate.cmp_precedence(&current) == Ordering::Less)
            .map(|(_, name)| name.clone())
            .ok_or_else(|| ServiceError::NotFound(format!("version prior to '{version}'")))
    }
}

impl ReleasePublisher for CatalogProvider {
    fn latest_release(
        &self,
        _config: &RunConfig,
        stream: &str,
        resolve_image: bool,
    ) -> clusterver_core::Result<ReleaseInfo> {
        let entry = self
            .catalog
            .streams
            .get(stream)
            .ok_or_else(|| ServiceError::NotFound(format!("release stream '{stream}'")))?;

        Ok(ReleaseInfo {
            name: entry.latest.clone(),
            image: if resolve_image {
                entry.image.clone()
            } else {
                String::new()
            },
        })
    }
}
