//! gitlab-mr-deps - client for GitLab merge request dependencies
//!
//! This library creates, deletes and lists "blocking merge request"
//! relationships through the GitLab REST API (`projects/:id/merge_requests/:iid/blocks`),
//! following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`merge_requests`): Project identifiers and the decoded
//!   dependency records
//! - **Application Layer** (`application`): The dependencies service and DTOs
//! - **Ports** (`ports`): The transport and formatter interfaces
//! - **Adapters** (`adapters`): reqwest transport and output formatters
//! - **Shared** (`shared`): Errors, result aliases and URL escaping
//!
//! # Example
//!
//! ```no_run
//! use gitlab_mr_deps::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let transport = ReqwestTransport::new("https://gitlab.example.com", Some("glpat-token".into()))?;
//! let service = MergeRequestDependenciesService::new(transport);
//!
//! service
//!     .create_dependency("group/project", 3, &CreateMergeRequestDependencyOptions::new(569), &[])
//!     .await?;
//!
//! let (dependencies, response) = service.list_dependencies("group/project", 3, &[]).await?;
//! for dependency in &dependencies {
//!     println!("{}", dependency.blocking_merge_request.title);
//! }
//! println!("status: {}", response.status);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod merge_requests;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::network::ReqwestTransport;
    pub use crate::application::dto::{
        CreateMergeRequestDependencyOptions, DependencyReport, MergeRequestBlockers,
        OutputFormat,
    };
    pub use crate::application::services::MergeRequestDependenciesService;
    pub use crate::merge_requests::domain::{
        BasicUser, BlockingMergeRequest, MergeRequestDependency, ProjectId,
    };
    pub use crate::ports::outbound::{
        ApiRequest, ApiTransport, DependencyFormatter, RawResponse, RequestOption, Response,
    };
    pub use crate::shared::error::ApiError;
    pub use crate::shared::{ApiResult, Result};
}
