use std::sync::Mutex;

use clusterver_core::{ReleaseInfo, RunConfig, ServiceError, VersionTarget};

use crate::traits::{ReleasePublisher, VersionRanker};

/// A canned service answer. `Err` holds the message of a request failure.
type Response = std::result::Result<String, String>;

fn answer(response: Option<&Response>, what: &str) -> clusterver_core::Result<String> {
    match response {
        Some(Ok(version)) => Ok(version.clone()),
        Some(Err(message)) => Err(ServiceError::Request(message.clone())),
        None => Err(ServiceError::NotFound(what.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankerCall {
    Latest(VersionTarget),
    Default,
    Previous(String),
}

/// Version ranker answering from preset responses and recording every call.
///
/// Unconfigured lookups fail with [`ServiceError::NotFound`].
#[derive(Default)]
pub struct MockVersionRanker {
    latest: Option<Response>,
    default: Option<Response>,
    previous: Option<Response>,
    calls: Mutex<Vec<RankerCall>>,
}

impl MockVersionRanker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_latest(mut self, version: &str) -> Self {
        self.latest = Some(Ok(version.to_string()));
        self
    }

    #[must_use]
    pub fn with_default(mut self, version: &str) -> Self {
        self.default = Some(Ok(version.to_string()));
        self
    }

    #[must_use]
    pub fn with_previous(mut self, version: &str) -> Self {
        self.previous = Some(Ok(version.to_string()));
        self
    }

    #[must_use]
    pub fn failing_latest(mut self, message: &str) -> Self {
        self.latest = Some(Err(message.to_string()));
        self
    }

    #[must_use]
    pub fn failing_default(mut self, message: &str) -> Self {
        self.default = Some(Err(message.to_string()));
        self
    }

    #[must_use]
    pub fn failing_previous(mut self, message: &str) -> Self {
        self.previous = Some(Err(message.to_string()));
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<RankerCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: RankerCall) {
        self.calls.lock().expect("lock poisoned").push(call);
    }
}

impl VersionRanker for MockVersionRanker {
    fn latest_version(&self, target: &VersionTarget) -> clusterver_core::Result<String> {
        self.record(RankerCall::Latest(*target));
        answer(self.latest.as_ref(), "latest version")
    }

    fn default_version(&self) -> clusterver_core::Result<String> {
        self.record(RankerCall::Default);
        answer(self.default.as_ref(), "default version")
    }

    fn previous_version(&self, version: &str) -> clusterver_core::Result<String> {
        self.record(RankerCall::Previous(version.to_string()));
        answer(self.previous.as_ref(), "previous version")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherCall {
    pub stream: String,
    pub resolve_image: bool,
}

/// Release publisher answering with one preset release.
#[derive(Default)]
pub struct MockReleasePublisher {
    release: Option<std::result::Result<ReleaseInfo, String>>,
    calls: Mutex<Vec<PublisherCall>>,
}

impl MockReleasePublisher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_release(mut self, name: &str, image: &str) -> Self {
        self.release = Some(Ok(ReleaseInfo {
            name: name.to_string(),
            image: image.to_string(),
        }));
        self
    }

    #[must_use]
    pub fn failing(mut self, message: &str) -> Self {
        self.release = Some(Err(message.to_string()));
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<PublisherCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl ReleasePublisher for MockReleasePublisher {
    fn latest_release(
        &self,
        _config: &RunConfig,
        stream: &str,
        resolve_image: bool,
    ) -> clusterver_core::Result<ReleaseInfo> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(PublisherCall {
                stream: stream.to_string(),
                resolve_image,
            });

        match &self.release {
            Some(Ok(release)) => Ok(release.clone()),
            Some(Err(message)) => Err(ServiceError::Request(message.clone())),
            None => Err(ServiceError::NotFound(format!("release stream '{stream}'"))),
        }
    }
}

#[must_use]
pub fn upgrade_config(stream: &str) -> RunConfig {
    RunConfig {
        upgrade_release_stream: stream.to_string(),
        ..RunConfig::default()
    }
}
