/// Data Transfer Objects for application layer
///
/// DTOs carry request options into services and listed results out to
/// formatters, keeping the domain layer isolated.
mod create_dependency_options;
mod dependency_report;
mod output_format;

pub use create_dependency_options::CreateMergeRequestDependencyOptions;
pub use dependency_report::{DependencyReport, MergeRequestBlockers};
pub use output_format::OutputFormat;
