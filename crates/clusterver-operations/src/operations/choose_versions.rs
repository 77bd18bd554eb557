use clusterver_core::{RunConfig, RunMetadata};
use tracing::debug;

use super::{UpgradePathResolver, VersionSelector};
use crate::log::{ResolutionEvent, ResolutionLog};
use crate::traits::{ReleasePublisher, VersionRanker};
use crate::{OperationError, Result};

/// Which branch of resolution produced the versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// The cluster version was configured explicitly.
    Pinned,
    /// Install and upgrade versions came from an upgrade release stream.
    UpgradeStream,
    /// Only the install version was selected.
    Selected,
}

/// What a resolution pass leaves behind for reporting, whether it succeeded
/// or not.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub metadata: RunMetadata,
    pub log: ResolutionLog,
}

pub struct ChooseVersionsOperation<V, P> {
    cluster_client: Option<V>,
    release_publisher: P,
}

impl<V, P> ChooseVersionsOperation<V, P>
where
    V: VersionRanker,
    P: ReleasePublisher,
{
    pub fn new(cluster_client: Option<V>, release_publisher: P) -> Self {
        Self {
            cluster_client,
            release_publisher,
        }
    }

    /// Resolves the install and upgrade versions of `config` in place.
    ///
    /// The returned [`Resolution`] always carries metadata mirroring the
    /// config after the pass, including when the pass failed part way.
    pub fn execute(&self, config: &mut RunConfig) -> (Result<ResolutionPath>, Resolution) {
        let mut log = ResolutionLog::new();
        let result = self.dispatch(config, &mut log);

        let metadata = RunMetadata::from_config(config);
        debug!(
            cluster_version = %metadata.cluster_version,
            upgrade_version = %metadata.upgrade_version,
            "published run metadata"
        );

        (result, Resolution { metadata, log })
    }

    fn dispatch(&self, config: &mut RunConfig, log: &mut ResolutionLog) -> Result<ResolutionPath> {
        if config.is_pinned() {
            log.record(ResolutionEvent::PinnedVersion {
                version: config.cluster_version.clone(),
            });
            return Ok(ResolutionPath::Pinned);
        }

        let Some(ranker) = &self.cluster_client else {
            return Err(OperationError::MissingClusterClient);
        };

        if !config.has_upgrade_image() && config.has_upgrade_stream() {
            UpgradePathResolver::resolve(config, ranker, &self.release_publisher, log)?;
            Ok(ResolutionPath::UpgradeStream)
        } else {
            VersionSelector::select(config, ranker, log)?;
            Ok(ResolutionPath::Selected)
        }
    }
}
