use clusterver_core::{ReleaseInfo, RunConfig};

/// Looks up published releases on a release stream.
pub trait ReleasePublisher: Send + Sync {
    /// Latest release published on `stream`. When `resolve_image` is set the
    /// returned release also carries its image pull spec.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is unknown or the service cannot be
    /// queried.
    fn latest_release(
        &self,
        config: &RunConfig,
        stream: &str,
        resolve_image: bool,
    ) -> clusterver_core::Result<ReleaseInfo>;
}

impl<T: ReleasePublisher + ?Sized> ReleasePublisher for &T {
    fn latest_release(
        &self,
        config: &RunConfig,
        stream: &str,
        resolve_image: bool,
    ) -> clusterver_core::Result<ReleaseInfo> {
        (**self).latest_release(config, stream, resolve_image)
    }
}
