use super::formatter::{ReportFormatter, ResolveReport};
use crate::error::Result;

pub(crate) struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ResolveReport<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
