use crate::application::dto::DependencyReport;
use crate::shared::Result;

/// DependencyFormatter port for rendering listed dependencies
///
/// This port abstracts the output format (terminal table, JSON, etc.)
/// used by the CLI to present a dependency report.
pub trait DependencyFormatter {
    /// Formats a dependency report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &DependencyReport) -> Result<String>;
}
