use clusterver_core::RunConfig;
use clusterver_version::is_upgrade;

use super::VersionSelector;
use crate::log::{ResolutionEvent, ResolutionLog};
use crate::traits::{ReleasePublisher, VersionRanker};
use crate::{OperationError, Result};

/// Resolves an install version and the release it upgrades to.
pub struct UpgradePathResolver;

impl UpgradePathResolver {
    /// Picks the install version, then the latest release on
    /// `config.upgrade_release_stream` as upgrade target.
    ///
    /// When the install version is not strictly older than the upgrade
    /// release, the version right before the release is installed instead.
    ///
    /// # Errors
    ///
    /// Returns an error if any lookup fails or if one of the two versions
    /// cannot be parsed. Fields resolved before the failure stay set.
    pub fn resolve<V, P>(
        config: &mut RunConfig,
        ranker: &V,
        publisher: &P,
        log: &mut ResolutionLog,
    ) -> Result<()>
    where
        V: VersionRanker + ?Sized,
        P: ReleasePublisher + ?Sized,
    {
        VersionSelector::select(config, ranker, log)?;

        let stream = config.upgrade_release_stream.clone();
        let release = publisher
            .latest_release(config, &stream, true)
            .map_err(|source| OperationError::LatestRelease {
                stream: stream.clone(),
                source,
            })?;
        log.record(ResolutionEvent::UpgradeReleaseFound {
            stream: stream.clone(),
            release: release.name.clone(),
            image: release.image.clone(),
        });
        config.upgrade_release_name = release.name;
        config.upgrade_image = release.image;

        let install = ranker.to_semver(&config.cluster_version)?;
        let upgrade = ranker.to_semver(&config.upgrade_release_name)?;

        if !is_upgrade(&install, &upgrade) {
            log.record(ResolutionEvent::InstallNotOlderThanUpgrade {
                install: config.cluster_version.clone(),
                upgrade: config.upgrade_release_name.clone(),
            });
            let previous = ranker
                .previous_version(&config.upgrade_release_name)
                .map_err(|source| OperationError::PreviousVersion {
                    release: config.upgrade_release_name.clone(),
                    source,
                })?;
            log.record(ResolutionEvent::PreviousVersionSelected {
                version: previous.clone(),
                upgrade: config.upgrade_release_name.clone(),
            });
            config.cluster_version = previous;
        }

        log.record(ResolutionEvent::UpgradePathSelected {
            install: config.cluster_version.clone(),
            upgrade: config.upgrade_release_name.clone(),
            stream,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockReleasePublisher, MockVersionRanker, RankerCall, upgrade_config};

    const IMAGE: &str = "quay.io/openshift-release-dev/ocp-release:4.11.0-x86_64";

    fn resolve(
        config: &mut RunConfig,
        ranker: &MockVersionRanker,
        publisher: &MockReleasePublisher,
    ) -> Result<()> {
        UpgradePathResolver::resolve(config, ranker, publisher, &mut ResolutionLog::new())
    }

    #[test]
    fn older_install_is_kept() {
        let ranker = MockVersionRanker::new().with_default("4.10.3");
        let publisher = MockReleasePublisher::new().with_release("4.11.0", IMAGE);
        let mut config = upgrade_config("fast-4.11");

        resolve(&mut config, &ranker, &publisher).expect("upgrade path");

        assert_eq!(config.cluster_version, "4.10.3");
        assert_eq!(config.upgrade_release_name, "4.11.0");
        assert_eq!(config.upgrade_image, IMAGE);
        assert!(!ranker
            .calls()
            .iter()
            .any(|call| matches!(call, RankerCall::Previous(_))));
    }

    #[test]
    fn equal_install_is_replaced_with_previous_version() {
        let ranker = MockVersionRanker::new()
            .with_default("4.11.0")
            .with_previous("4.10.5");
        let publisher = MockReleasePublisher::new().with_release("4.11.0", IMAGE);
        let mut config = upgrade_config("fast-4.11");

        resolve(&mut config, &ranker, &publisher).expect("upgrade path");

        assert_eq!(config.cluster_version, "4.10.5");
        assert_eq!(config.upgrade_release_name, "4.11.0");
        assert_eq!(
            ranker.calls(),
            vec![RankerCall::Default, RankerCall::Previous("4.11.0".to_string())]
        );
    }

    #[test]
    fn newer_install_is_replaced_with_previous_version() {
        let ranker = MockVersionRanker::new()
            .with_latest("4.12.2")
            .with_previous("4.11.3");
        let publisher = MockReleasePublisher::new().with_release("4.11.4", IMAGE);
        let mut config = RunConfig {
            minor_target: 12,
            ..upgrade_config("stable-4.11")
        };

        resolve(&mut config, &ranker, &publisher).expect("upgrade path");

        assert_eq!(config.cluster_version, "4.11.3");
    }

    #[test]
    fn requests_resolved_image_for_configured_stream() {
        let ranker = MockVersionRanker::new().with_default("4.10.3");
        let publisher = MockReleasePublisher::new().with_release("4.11.0", IMAGE);
        let mut config = upgrade_config("fast-4.11");

        resolve(&mut config, &ranker, &publisher).expect("upgrade path");

        let calls = publisher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].stream, "fast-4.11");
        assert!(calls[0].resolve_image);
    }

    #[test]
    fn selector_failure_aborts_before_release_lookup() {
        let ranker = MockVersionRanker::new().failing_default("timeout");
        let publisher = MockReleasePublisher::new().with_release("4.11.0", IMAGE);
        let mut config = upgrade_config("fast-4.11");

        let err = resolve(&mut config, &ranker, &publisher).expect_err("default fails");

        assert!(matches!(err, OperationError::DefaultLookup(_)));
        assert!(publisher.calls().is_empty());
    }

    #[test]
    fn release_failure_keeps_selected_install_version() {
        let ranker = MockVersionRanker::new().with_default("4.10.3");
        let publisher = MockReleasePublisher::new().failing("network unreachable");
        let mut config = upgrade_config("fast-4.11");

        let err = resolve(&mut config, &ranker, &publisher).expect_err("release lookup fails");

        assert!(
            matches!(&err, OperationError::LatestRelease { stream, .. } if stream == "fast-4.11")
        );
        assert_eq!(config.cluster_version, "4.10.3");
        assert!(config.upgrade_release_name.is_empty());
        assert!(config.upgrade_image.is_empty());
    }

    #[test]
    fn unparseable_release_is_surfaced_unwrapped() {
        let ranker = MockVersionRanker::new().with_default("4.10.3");
        let publisher = MockReleasePublisher::new().with_release("latest", IMAGE);
        let mut config = upgrade_config("fast-4.11");

        let err = resolve(&mut config, &ranker, &publisher).expect_err("parse fails");

        assert!(matches!(err, OperationError::Version(_)));
        assert!(err.to_string().contains("'latest'"));
        assert_eq!(config.upgrade_release_name, "latest");
    }

    #[test]
    fn previous_version_failure_names_release() {
        let ranker = MockVersionRanker::new()
            .with_default("4.11.0")
            .failing_previous("no older release");
        let publisher = MockReleasePublisher::new().with_release("4.11.0", IMAGE);
        let mut config = upgrade_config("fast-4.11");

        let err = resolve(&mut config, &ranker, &publisher).expect_err("previous fails");

        assert!(
            matches!(&err, OperationError::PreviousVersion { release, .. } if release == "4.11.0")
        );
        assert_eq!(config.cluster_version, "4.11.0");
    }

    #[test]
    fn records_correction_in_log() {
        let ranker = MockVersionRanker::new()
            .with_default("4.11.0")
            .with_previous("4.10.5");
        let publisher = MockReleasePublisher::new().with_release("4.11.0", IMAGE);
        let mut config = upgrade_config("fast-4.11");
        let mut log = ResolutionLog::new();

        UpgradePathResolver::resolve(&mut config, &ranker, &publisher, &mut log)
            .expect("upgrade path");

        assert!(log.events().contains(&ResolutionEvent::PreviousVersionSelected {
            version: "4.10.5".to_string(),
            upgrade: "4.11.0".to_string(),
        }));
        assert!(matches!(
            log.events().last(),
            Some(ResolutionEvent::UpgradePathSelected { .. })
        ));
    }
}
