use crate::application::dto::DependencyReport;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the report as pretty-printed JSON
///
/// Dependencies are written with the same field names GitLab uses, so the
/// output can be fed to tools expecting the API payload.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for JsonFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
