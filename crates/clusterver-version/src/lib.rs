mod error;

use std::cmp::Ordering;

use semver::Version;

pub use error::{Result, VersionError};

/// Prefix the platform puts in front of versions in its version identifiers.
pub const VERSION_PREFIX: &str = "openshift-v";

/// Converts a platform version string into a comparable semantic version.
///
/// Accepts an optional `openshift-v` or `v` prefix and pads a missing minor
/// or patch component with zero, so `openshift-v4.10` parses as `4.10.0`.
/// Pre-release and build suffixes are kept, which makes nightlies sort
/// before the release they lead up to.
///
/// # Errors
///
/// Returns an error if the remaining string is empty or not a valid version.
pub fn openshift_to_semver(version: &str) -> Result<Version> {
    let trimmed = version.trim();
    let stripped = trimmed
        .strip_prefix(VERSION_PREFIX)
        .or_else(|| trimmed.strip_prefix('v'))
        .unwrap_or(trimmed);

    if stripped.is_empty() {
        return Err(VersionError::Empty);
    }

    Version::parse(&pad_core(stripped)).map_err(|source| VersionError::Invalid {
        version: version.to_string(),
        source,
    })
}

/// Formats a semantic version the way the platform names its versions.
#[must_use]
pub fn semver_to_openshift(version: &Version) -> String {
    format!("{VERSION_PREFIX}{version}")
}

/// Returns true when `install` can be upgraded to `upgrade`.
///
/// Build metadata is ignored and equal versions are not an upgrade.
#[must_use]
pub fn is_upgrade(install: &Version, upgrade: &Version) -> bool {
    install.cmp_precedence(upgrade) == Ordering::Less
}

fn pad_core(version: &str) -> String {
    let suffix_start = version.find(['-', '+']).unwrap_or(version.len());
    let (core, suffix) = version.split_at(suffix_start);

    let missing = 2usize.saturating_sub(core.matches('.').count());
    let mut padded = String::with_capacity(version.len() + missing * 2);
    padded.push_str(core);
    for _ in 0..missing {
        padded.push_str(".0");
    }
    padded.push_str(suffix);
    padded
}
