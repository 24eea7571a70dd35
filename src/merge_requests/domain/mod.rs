pub mod basic_user;
pub mod merge_request_dependency;
pub mod project_id;

pub use basic_user::BasicUser;
pub use merge_request_dependency::{
    BlockingMergeRequest, IssueReferences, MergeRequestDependency, Milestone,
    TasksCompletionStatus, TimeStats,
};
pub use project_id::ProjectId;
