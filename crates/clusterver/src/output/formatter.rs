use clap::ValueEnum;
use clusterver_core::{RunConfig, RunMetadata};
use clusterver_operations::operations::{Resolution, ResolutionPath};
use serde::Serialize;

use super::json::JsonFormatter;
use super::plain::PlainTextFormatter;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub(crate) fn render(self, report: &ResolveReport<'_>) -> Result<String> {
        match self {
            Self::Plain => PlainTextFormatter.format(report),
            Self::Json => JsonFormatter.format(report),
        }
    }
}

pub(crate) trait ReportFormatter {
    fn format(&self, report: &ResolveReport<'_>) -> Result<String>;
}

/// Everything printed after a resolution pass.
#[derive(Debug, Serialize)]
pub(crate) struct ResolveReport<'a> {
    /// `None` when resolution failed.
    pub(crate) path: Option<&'static str>,
    #[serde(flatten)]
    pub(crate) metadata: &'a RunMetadata,
    pub(crate) upgrade_image: &'a str,
    pub(crate) events: Vec<String>,
}

impl<'a> ResolveReport<'a> {
    pub(crate) fn new(
        config: &'a RunConfig,
        resolution: &'a Resolution,
        path: Option<ResolutionPath>,
    ) -> Self {
        Self {
            path: path.map(path_label),
            metadata: &resolution.metadata,
            upgrade_image: &config.upgrade_image,
            events: resolution
                .log
                .events()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

fn path_label(path: ResolutionPath) -> &'static str {
    match path {
        ResolutionPath::Pinned => "pinned",
        ResolutionPath::UpgradeStream => "upgrade-stream",
        ResolutionPath::Selected => "selected",
    }
}
