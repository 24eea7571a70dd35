use crate::application::dto::{
    CreateMergeRequestDependencyOptions, DependencyReport, MergeRequestBlockers,
};
use crate::merge_requests::domain::{MergeRequestDependency, ProjectId};
use crate::ports::outbound::{ApiRequest, ApiTransport, RequestOption, Response};
use crate::shared::error::ApiError;
use crate::shared::ApiResult;
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Method;

/// Upper bound on concurrent list requests when building a report
const MAX_CONCURRENT_LISTS: usize = 4;

/// MergeRequestDependenciesService - GitLab merge request dependencies API
///
/// Maps the create, delete and list operations of the
/// `projects/:id/merge_requests/:iid/blocks` resource onto requests sent
/// through the injected transport.
///
/// Each call performs exactly one request. Errors from identifier
/// normalization are returned before anything is sent; errors from the
/// transport, the status check or decoding are returned unchanged.
///
/// # Type Parameters
/// * `T` - ApiTransport implementation
pub struct MergeRequestDependenciesService<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> MergeRequestDependenciesService<T> {
    /// Creates a new service with an injected transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Makes `merge_request_iid` depend on the merge request whose global ID
    /// is given in `options`.
    ///
    /// `POST projects/:id/merge_requests/:iid/blocks`
    pub async fn create_dependency(
        &self,
        project: impl Into<ProjectId>,
        merge_request_iid: u64,
        options: &CreateMergeRequestDependencyOptions,
        request_options: &[RequestOption],
    ) -> ApiResult<Response> {
        let path = blocks_path(&project.into(), merge_request_iid)?;
        let request = ApiRequest::new(Method::POST, path)
            .json(options)?
            .with_options(request_options);

        tracing::debug!(
            path = request.path(),
            blocking_merge_request_id = ?options.blocking_merge_request_id,
            "creating merge request dependency"
        );

        self.transport.send(request).await?.into_response()
    }

    /// Removes the dependency of `merge_request_iid` on the merge request
    /// with IID `blocking_merge_request_iid`.
    ///
    /// `DELETE projects/:id/merge_requests/:iid/blocks/:blocking_iid`
    pub async fn delete_dependency(
        &self,
        project: impl Into<ProjectId>,
        merge_request_iid: u64,
        blocking_merge_request_iid: u64,
        request_options: &[RequestOption],
    ) -> ApiResult<Response> {
        let path = format!(
            "{}/{}",
            blocks_path(&project.into(), merge_request_iid)?,
            blocking_merge_request_iid
        );
        let request = ApiRequest::new(Method::DELETE, path).with_options(request_options);

        tracing::debug!(path = request.path(), "deleting merge request dependency");

        self.transport.send(request).await?.into_response()
    }

    /// Lists the merge requests blocking `merge_request_iid`, in server order.
    ///
    /// `GET projects/:id/merge_requests/:iid/blocks`
    pub async fn list_dependencies(
        &self,
        project: impl Into<ProjectId>,
        merge_request_iid: u64,
        request_options: &[RequestOption],
    ) -> ApiResult<(Vec<MergeRequestDependency>, Response)> {
        let path = blocks_path(&project.into(), merge_request_iid)?;
        let request = ApiRequest::new(Method::GET, path).with_options(request_options);

        tracing::debug!(path = request.path(), "listing merge request dependencies");

        let (dependencies, response) = self
            .transport
            .send(request)
            .await?
            .decode_json::<Vec<MergeRequestDependency>>()?;

        tracing::debug!(count = dependencies.len(), "listed merge request dependencies");
        Ok((dependencies, response))
    }

    /// Lists dependencies for several merge requests of one project.
    ///
    /// Requests run concurrently (bounded), results keep the order of
    /// `merge_request_iids`. The first failure aborts the report.
    pub async fn dependency_report(
        &self,
        project: impl Into<ProjectId>,
        merge_request_iids: &[u64],
        request_options: &[RequestOption],
    ) -> ApiResult<DependencyReport> {
        let project = project.into();
        // fail fast without sending anything
        project.normalize()?;

        let merge_requests: Vec<MergeRequestBlockers> =
            stream::iter(merge_request_iids.iter().copied())
                .map(|iid| {
                    let project = &project;
                    async move {
                        let (dependencies, _) =
                            self.list_dependencies(project, iid, request_options).await?;
                        Ok::<_, ApiError>(MergeRequestBlockers::new(iid, dependencies))
                    }
                })
                .buffered(MAX_CONCURRENT_LISTS)
                .try_collect()
                .await?;

        Ok(DependencyReport::new(project, merge_requests))
    }
}

/// `projects/<escaped id>/merge_requests/<iid>/blocks`
fn blocks_path(project: &ProjectId, merge_request_iid: u64) -> ApiResult<String> {
    Ok(format!(
        "projects/{}/merge_requests/{}/blocks",
        project.path_segment()?,
        merge_request_iid
    ))
}

#[cfg(test)]
mod tests;
