use std::fmt;

use clusterver_core::VersionTarget;
use tracing::{info, warn};

/// A decision taken while resolving versions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolutionEvent {
    /// The configured cluster version was kept.
    PinnedVersion { version: String },
    /// The latest version of a requested family was selected.
    FamilyVersionSelected {
        target: VersionTarget,
        version: String,
    },
    /// The family lookup answered without a version.
    FamilyLookupEmpty { target: VersionTarget },
    /// The platform default version was selected.
    DefaultVersionSelected { version: String },
    /// The latest release of the upgrade stream was found.
    UpgradeReleaseFound {
        stream: String,
        release: String,
        image: String,
    },
    /// The selected install version is not older than the upgrade release.
    InstallNotOlderThanUpgrade { install: String, upgrade: String },
    /// The version preceding the upgrade release replaced the install version.
    PreviousVersionSelected { version: String, upgrade: String },
    /// The final install/upgrade pair of an upgrade run.
    UpgradePathSelected {
        install: String,
        upgrade: String,
        stream: String,
    },
}

impl fmt::Display for ResolutionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinnedVersion { version } => {
                write!(f, "using configured cluster version '{version}'")
            }
            Self::FamilyVersionSelected { target, version } => {
                write!(
                    f,
                    "cluster version not set but target {target} is, using '{version}'"
                )
            }
            Self::FamilyLookupEmpty { target } => {
                write!(f, "no version found for target {target}, using the default")
            }
            Self::DefaultVersionSelected { version } => {
                write!(
                    f,
                    "cluster version not set, using the current default '{version}'"
                )
            }
            Self::UpgradeReleaseFound {
                stream,
                release,
                image,
            } => write!(
                f,
                "latest release on stream '{stream}' is '{release}' ({image})"
            ),
            Self::InstallNotOlderThanUpgrade { install, upgrade } => write!(
                f,
                "cluster version '{install}' is equal to or newer than upgrade version '{upgrade}'"
            ),
            Self::PreviousVersionSelected { version, upgrade } => {
                write!(f, "using '{version}', the version prior to '{upgrade}'")
            }
            Self::UpgradePathSelected {
                install,
                upgrade,
                stream,
            } => write!(
                f,
                "selecting version '{install}' to be able to upgrade to '{upgrade}' on release stream '{stream}'"
            ),
        }
    }
}

impl ResolutionEvent {
    fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::FamilyLookupEmpty { .. } | Self::InstallNotOlderThanUpgrade { .. }
        )
    }
}

/// Ordered record of the decisions made during one resolution pass.
///
/// Every recorded event is also emitted as a `tracing` event.
#[derive(Debug, Default, Clone)]
pub struct ResolutionLog {
    events: Vec<ResolutionEvent>,
}

impl ResolutionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: ResolutionEvent) {
        if event.is_warning() {
            warn!("{event}");
        } else {
            info!("{event}");
        }
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[ResolutionEvent] {
        &self.events
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// One line per event, for display.
    #[must_use]
    pub fn summary(&self) -> String {
        self.events
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
