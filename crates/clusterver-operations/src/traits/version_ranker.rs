use clusterver_core::VersionTarget;
use semver::Version;

/// Ranks the cluster versions the platform can install.
///
/// This is the cluster client side of resolution: it knows which versions
/// exist, which one is the current default, and how they order.
pub trait VersionRanker: Send + Sync {
    /// Latest installable version inside the requested family.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be queried.
    fn latest_version(&self, target: &VersionTarget) -> clusterver_core::Result<String>;

    /// # Errors
    ///
    /// Returns an error if the service cannot be queried.
    fn default_version(&self) -> clusterver_core::Result<String>;

    /// Newest installable version strictly older than `version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be queried or no older version
    /// exists.
    fn previous_version(&self, version: &str) -> clusterver_core::Result<String>;

    /// # Errors
    ///
    /// Returns an error if `version` is not a recognizable version string.
    fn to_semver(&self, version: &str) -> clusterver_version::Result<Version> {
        clusterver_version::openshift_to_semver(version)
    }
}

impl<T: VersionRanker + ?Sized> VersionRanker for &T {
    fn latest_version(&self, target: &VersionTarget) -> clusterver_core::Result<String> {
        (**self).latest_version(target)
    }

    fn default_version(&self) -> clusterver_core::Result<String> {
        (**self).default_version()
    }

    fn previous_version(&self, version: &str) -> clusterver_core::Result<String> {
        (**self).previous_version(version)
    }

    fn to_semver(&self, version: &str) -> clusterver_version::Result<Version> {
        (**self).to_semver(version)
    }
}
