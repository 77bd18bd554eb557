use super::formatter::{ReportFormatter, ResolveReport};
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl ReportFormatter for PlainTextFormatter {
    fn format(&self, report: &ResolveReport<'_>) -> Result<String> {
        let mut lines = vec![
            format!("cluster version: {}", or_unset(&report.metadata.cluster_version)),
            format!("upgrade version: {}", or_unset(&report.metadata.upgrade_version)),
        ];
        if !report.upgrade_image.is_empty() {
            lines.push(format!("upgrade image:   {}", report.upgrade_image));
        }
        if let Some(path) = report.path {
            lines.push(format!("resolved via:    {path}"));
        }
        Ok(lines.join("\n"))
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(unset)" } else { value }
}
