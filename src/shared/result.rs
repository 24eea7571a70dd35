use crate::shared::error::ApiError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by the application shell (CLI, config loading).
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a GitLab API operation.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
