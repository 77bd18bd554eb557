mod choose_versions;
mod upgrade_path;
mod version_selector;

pub use choose_versions::{ChooseVersionsOperation, Resolution, ResolutionPath};
pub use upgrade_path::UpgradePathResolver;
pub use version_selector::VersionSelector;
