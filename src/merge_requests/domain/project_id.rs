use crate::shared::error::ApiError;
use crate::shared::url_path::path_escape;
use crate::shared::ApiResult;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a GitLab project: either its numeric ID or its full
/// namespaced path (`group/subgroup/project`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectId {
    Numeric(u64),
    Path(String),
}

impl ProjectId {
    /// Validates the identifier and returns its unescaped string form.
    ///
    /// # Errors
    /// Returns `ApiError::InvalidProjectId` if:
    /// - a numeric ID is zero
    /// - a path is empty, has surrounding whitespace or slashes
    /// - a path contains an empty, `.` or `..` segment, or control characters
    pub fn normalize(&self) -> ApiResult<String> {
        match self {
            ProjectId::Numeric(0) => Err(self.invalid("numeric ID must be a positive integer")),
            ProjectId::Numeric(id) => Ok(id.to_string()),
            ProjectId::Path(path) => {
                if path.trim().is_empty() {
                    return Err(self.invalid("path must not be empty"));
                }
                if path.trim() != path {
                    return Err(self.invalid("path must not have surrounding whitespace"));
                }
                if path.chars().any(char::is_control) {
                    return Err(self.invalid("path must not contain control characters"));
                }
                if path.starts_with('/') || path.ends_with('/') {
                    return Err(self.invalid("path must not start or end with '/'"));
                }
                for segment in path.split('/') {
                    match segment {
                        "" => return Err(self.invalid("path contains an empty segment")),
                        "." | ".." => {
                            return Err(self.invalid("path contains a relative segment"))
                        }
                        _ => {}
                    }
                }
                Ok(path.clone())
            }
        }
    }

    /// Normalizes the identifier and escapes it into a single URL path segment.
    pub fn path_segment(&self) -> ApiResult<String> {
        self.normalize().map(|id| path_escape(&id))
    }

    fn invalid(&self, reason: &str) -> ApiError {
        ApiError::InvalidProjectId {
            value: self.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Numeric(id) => write!(f, "{}", id),
            ProjectId::Path(path) => write!(f, "{}", path),
        }
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        ProjectId::Numeric(id)
    }
}

impl From<&str> for ProjectId {
    fn from(path: &str) -> Self {
        ProjectId::Path(path.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(path: String) -> Self {
        ProjectId::Path(path)
    }
}

impl From<&ProjectId> for ProjectId {
    fn from(id: &ProjectId) -> Self {
        id.clone()
    }
}

/// Parses command-line input: all-digit strings become `Numeric`,
/// anything else a `Path`. Validation happens in `normalize`.
impl FromStr for ProjectId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = s.parse::<u64>() {
                return Ok(ProjectId::Numeric(id));
            }
        }
        Ok(ProjectId::Path(s.to_string()))
    }
}
