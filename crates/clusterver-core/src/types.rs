use std::fmt;

use semver::Version;
use serde::{Deserialize, Serialize};

/// Inputs and outputs of a single version resolution pass.
///
/// Empty strings mean "not set" and a zero target means "unconstrained",
/// matching how the run is configured from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Version to install. Empty until resolved.
    pub cluster_version: String,
    pub major_target: u32,
    pub minor_target: u32,
    /// Explicit upgrade image. When set, no release stream lookup happens.
    pub upgrade_image: String,
    /// Release stream to upgrade into. Non-empty marks an upgrade run.
    pub upgrade_release_stream: String,
    /// Upgrade version resolved from the release stream.
    pub upgrade_release_name: String,
}

impl RunConfig {
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        !self.cluster_version.is_empty()
    }

    #[must_use]
    pub fn has_upgrade_stream(&self) -> bool {
        !self.upgrade_release_stream.is_empty()
    }

    #[must_use]
    pub fn has_upgrade_image(&self) -> bool {
        !self.upgrade_image.is_empty()
    }

    /// Version family requested through the major/minor targets, if any.
    #[must_use]
    pub fn version_target(&self) -> Option<VersionTarget> {
        VersionTarget::from_targets(self.major_target, self.minor_target)
    }
}

/// A major/minor version family constraint.
///
/// `None` on either side means that component is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionTarget {
    pub major: Option<u32>,
    pub minor: Option<u32>,
}

impl VersionTarget {
    #[must_use]
    pub fn new(major: Option<u32>, minor: Option<u32>) -> Self {
        Self { major, minor }
    }

    /// Builds a target from raw configuration values where `0` means unset.
    ///
    /// Returns `None` when neither component is set. A minor-only request
    /// leaves the major unconstrained, and a major-only request leaves the
    /// minor unconstrained.
    #[must_use]
    pub fn from_targets(major: u32, minor: u32) -> Option<Self> {
        match (major, minor) {
            (0, 0) => None,
            (0, minor) => Some(Self::new(None, Some(minor))),
            (major, 0) => Some(Self::new(Some(major), None)),
            (major, minor) => Some(Self::new(Some(major), Some(minor))),
        }
    }

    #[must_use]
    pub fn matches(&self, version: &Version) -> bool {
        let major_ok = self.major.is_none_or(|m| u64::from(m) == version.major);
        let minor_ok = self.minor.is_none_or(|m| u64::from(m) == version.minor);
        major_ok && minor_ok
    }
}

impl fmt::Display for VersionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.major {
            Some(major) => write!(f, "{major}")?,
            None => write!(f, "*")?,
        }
        match self.minor {
            Some(minor) => write!(f, ".{minor}"),
            None => write!(f, ".*"),
        }
    }
}

/// Latest release of a stream as reported by the release-publishing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub name: String,
    /// Pull spec of the release image. Empty when it was not resolved.
    #[serde(default)]
    pub image: String,
}

/// The two reporting fields published after every resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub cluster_version: String,
    pub upgrade_version: String,
}

impl RunMetadata {
    #[must_use]
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            cluster_version: config.cluster_version.clone(),
            upgrade_version: config.upgrade_release_name.clone(),
        }
    }
}
