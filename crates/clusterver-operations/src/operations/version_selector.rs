use clusterver_core::RunConfig;

use crate::log::{ResolutionEvent, ResolutionLog};
use crate::traits::VersionRanker;
use crate::{OperationError, Result};

/// Resolves the version to install from the configured constraints.
pub struct VersionSelector;

impl VersionSelector {
    /// Fills `config.cluster_version` unless it is already set.
    ///
    /// A major/minor target selects the latest version of that family. With
    /// no target, or when the family lookup finds nothing, the platform
    /// default is used. `config` is only modified on success.
    ///
    /// # Errors
    ///
    /// Returns an error naming the failed lookup if the ranker cannot answer.
    pub fn select<V>(config: &mut RunConfig, ranker: &V, log: &mut ResolutionLog) -> Result<()>
    where
        V: VersionRanker + ?Sized,
    {
        if config.is_pinned() {
            return Ok(());
        }

        if let Some(target) = config.version_target() {
            let version = ranker
                .latest_version(&target)
                .map_err(|source| OperationError::FamilyLookup { target, source })?;

            if version.is_empty() {
                log.record(ResolutionEvent::FamilyLookupEmpty { target });
            } else {
                log.record(ResolutionEvent::FamilyVersionSelected {
                    target,
                    version: version.clone(),
                });
                config.cluster_version = version;
                return Ok(());
            }
        }

        let version = ranker
            .default_version()
            .map_err(OperationError::DefaultLookup)?;
        log.record(ResolutionEvent::DefaultVersionSelected {
            version: version.clone(),
        });
        config.cluster_version = version;

        Ok(())
    }
}
