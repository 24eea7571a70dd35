use super::BasicUser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A "blocks" relationship: `blocking_merge_request` must be merged before
/// the merge request the dependency was listed for can be merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRequestDependency {
    pub id: u64,
    pub blocking_merge_request: BlockingMergeRequest,
    pub project_id: u64,
}

/// Snapshot of the blocking merge request, as returned by the server at
/// query time.
///
/// Fields GitLab may omit or send as `null` are `Option`s, so an absent
/// field stays distinguishable from its zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockingMergeRequest {
    pub id: u64,
    pub iid: u64,
    pub project_id: u64,
    pub title: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub target_branch: Option<String>,
    pub source_branch: Option<String>,
    pub description: Option<String>,
    pub upvotes: Option<u64>,
    pub downvotes: Option<u64>,
    pub author: Option<BasicUser>,
    pub assignee: Option<BasicUser>,
    pub assignees: Option<Vec<BasicUser>>,
    pub reviewers: Option<Vec<BasicUser>>,
    pub source_project_id: Option<u64>,
    pub target_project_id: Option<u64>,
    pub labels: Option<Vec<String>>,
    pub draft: Option<bool>,
    pub work_in_progress: Option<bool>,
    pub milestone: Option<Milestone>,
    pub merge_when_pipeline_succeeds: Option<bool>,
    pub detailed_merge_status: Option<String>,
    pub merged_by: Option<BasicUser>,
    pub merged_at: Option<DateTime<Utc>>,
    pub closed_by: Option<BasicUser>,
    pub closed_at: Option<DateTime<Utc>>,
    pub sha: Option<String>,
    pub merge_commit_sha: Option<String>,
    pub squash_commit_sha: Option<String>,
    pub user_notes_count: Option<u64>,
    pub should_remove_source_branch: Option<bool>,
    pub force_remove_source_branch: Option<bool>,
    pub web_url: Option<String>,
    pub references: Option<IssueReferences>,
    pub discussion_locked: Option<bool>,
    pub time_stats: Option<TimeStats>,
    pub squash: Option<bool>,
    pub approvals_before_merge: Option<u64>,
    pub reference: Option<String>,
    pub task_completion_status: Option<TasksCompletionStatus>,
    pub has_conflicts: Option<bool>,
    pub blocking_discussions_resolved: Option<bool>,
    pub merge_status: Option<String>,
    pub merge_user: Option<BasicUser>,
    pub merge_after: Option<DateTime<Utc>>,
    pub imported: Option<bool>,
    pub imported_from: Option<String>,
    pub prepared_at: Option<DateTime<Utc>>,
    pub squash_on_merge: Option<bool>,
}

impl BlockingMergeRequest {
    /// Whether the blocker no longer holds up its dependents.
    pub fn is_merged(&self) -> bool {
        self.state == "merged"
    }

    /// Human-facing reference, e.g. `group/project!12`, falling back to `!iid`.
    pub fn display_reference(&self) -> String {
        self.references
            .as_ref()
            .and_then(|r| r.full.clone())
            .unwrap_or_else(|| format!("!{}", self.iid))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReferences {
    pub short: Option<String>,
    pub relative: Option<String>,
    pub full: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeStats {
    pub time_estimate: Option<u64>,
    pub total_time_spent: Option<u64>,
    pub human_time_estimate: Option<String>,
    pub human_total_time_spent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksCompletionStatus {
    pub count: u64,
    pub completed_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub iid: Option<u64>,
    pub project_id: Option<u64>,
    pub title: String,
    pub description: Option<String>,
    pub state: Option<String>,
    pub due_date: Option<String>,
    pub web_url: Option<String>,
}
