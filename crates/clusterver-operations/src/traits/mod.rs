mod release_publisher;
mod version_ranker;

pub use release_publisher::ReleasePublisher;
pub use version_ranker::VersionRanker;
