use crate::merge_requests::domain::{MergeRequestDependency, ProjectId};
use serde::Serialize;

/// Blockers listed for a single merge request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeRequestBlockers {
    pub merge_request_iid: u64,
    pub dependencies: Vec<MergeRequestDependency>,
}

impl MergeRequestBlockers {
    pub fn new(merge_request_iid: u64, dependencies: Vec<MergeRequestDependency>) -> Self {
        Self {
            merge_request_iid,
            dependencies,
        }
    }

    /// Blockers that are not merged yet.
    pub fn open_blockers(&self) -> usize {
        self.dependencies
            .iter()
            .filter(|d| !d.blocking_merge_request.is_merged())
            .count()
    }
}

/// Listed dependencies for one or more merge requests of a project,
/// in the order the merge requests were requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyReport {
    #[serde(serialize_with = "serialize_project")]
    pub project: ProjectId,
    pub merge_requests: Vec<MergeRequestBlockers>,
}

impl DependencyReport {
    pub fn new(project: ProjectId, merge_requests: Vec<MergeRequestBlockers>) -> Self {
        Self {
            project,
            merge_requests,
        }
    }
}

fn serialize_project<S: serde::Serializer>(
    project: &ProjectId,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match project {
        ProjectId::Numeric(id) => serializer.serialize_u64(*id),
        ProjectId::Path(path) => serializer.serialize_str(path),
    }
}
