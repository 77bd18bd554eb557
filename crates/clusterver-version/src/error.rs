use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,

    #[error("invalid version '{version}'")]
    Invalid {
        version: String,
        #[source]
        source: semver::Error,
    },
}

pub type Result<T> = std::result::Result<T, VersionError>;
