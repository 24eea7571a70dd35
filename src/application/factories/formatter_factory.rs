use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DependencyFormatter;

/// Factory for creating dependency formatters
///
/// Selects the formatter adapter for an output format, so the CLI only
/// depends on the `DependencyFormatter` port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `colored` only affects the table format.
    ///
    /// # Examples
    /// ```
    /// use gitlab_mr_deps::application::dto::OutputFormat;
    /// use gitlab_mr_deps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn DependencyFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::with_colors(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
