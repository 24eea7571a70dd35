use super::*;
use crate::ports::outbound::RawResponse;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Mutex;

// Mock transport answering every request with the same canned response
struct MockTransport {
    status: StatusCode,
    body: String,
    fail: bool,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(StatusCode::OK, "")
        }
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let url = format!("https://gitlab.example.com/api/v4/{}", request.path());
        let method = request.method().clone();
        self.requests.lock().unwrap().push(request);

        if self.fail {
            return Err(ApiError::Transport {
                url,
                message: "connection reset".to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection reset",
                )),
            });
        }

        Ok(RawResponse::new(
            Response::new(method, url, self.status, HeaderMap::new()),
            self.body.as_bytes().to_vec(),
        ))
    }
}

fn dependency_json(id: u64, blocking_iid: u64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "project_id": 7,
        "blocking_merge_request": {
            "id": 500 + blocking_iid,
            "iid": blocking_iid,
            "project_id": 7,
            "title": title,
            "state": "opened",
            "created_at": "2024-05-14T18:56:36.064Z",
            "updated_at": "2024-05-15T08:00:00Z"
        }
    })
}

#[tokio::test]
async fn test_create_path_and_body() {
    let service = MergeRequestDependenciesService::new(MockTransport::new(StatusCode::CREATED, ""));

    service
        .create_dependency(
            "group/project",
            3,
            &CreateMergeRequestDependencyOptions::new(569),
            &[],
        )
        .await
        .unwrap();

    let requests = service.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method(), &Method::POST);
    assert_eq!(
        requests[0].path(),
        "projects/group%2Fproject/merge_requests/3/blocks"
    );
    assert_eq!(
        requests[0].body(),
        Some(&json!({"blocking_merge_request_id": 569}))
    );
}

#[tokio::test]
async fn test_delete_path_has_both_iids() {
    let service =
        MergeRequestDependenciesService::new(MockTransport::new(StatusCode::NO_CONTENT, ""));

    service.delete_dependency(42u64, 3, 8, &[]).await.unwrap();

    let requests = service.transport().requests();
    assert_eq!(requests[0].method(), &Method::DELETE);
    assert_eq!(requests[0].path(), "projects/42/merge_requests/3/blocks/8");
    assert!(requests[0].body().is_none());
}

#[tokio::test]
async fn test_list_path_escapes_dotted_project() {
    let service = MergeRequestDependenciesService::new(MockTransport::new(StatusCode::OK, "[]"));

    service
        .list_dependencies("group/my.project", 3, &[])
        .await
        .unwrap();

    let requests = service.transport().requests();
    assert_eq!(requests[0].method(), &Method::GET);
    assert_eq!(
        requests[0].path(),
        "projects/group%2Fmy%2Eproject/merge_requests/3/blocks"
    );
}

#[tokio::test]
async fn test_transport_error_propagated() {
    let service = MergeRequestDependenciesService::new(MockTransport::failing());
    let err = service
        .create_dependency(7u64, 3, &CreateMergeRequestDependencyOptions::new(9), &[])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Transport { ref message, .. } if message == "connection reset"
    ));
    assert_eq!(service.transport().requests().len(), 1);

    let service = MergeRequestDependenciesService::new(MockTransport::failing());
    let err = service.delete_dependency(7u64, 3, 4, &[]).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Transport { ref message, .. } if message == "connection reset"
    ));
    assert_eq!(service.transport().requests().len(), 1);

    let service = MergeRequestDependenciesService::new(MockTransport::failing());
    let err = service.list_dependencies(7u64, 3, &[]).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Transport { ref message, .. } if message == "connection reset"
    ));
    assert_eq!(service.transport().requests().len(), 1);
}

#[tokio::test]
async fn test_dependency_report_keeps_requested_order() {
    let body = json!([dependency_json(1, 10, "Blocker")]).to_string();
    let service = MergeRequestDependenciesService::new(MockTransport::new(StatusCode::OK, &body));

    let report = service
        .dependency_report("group/project", &[5, 3, 9], &[])
        .await
        .unwrap();

    assert_eq!(report.project, ProjectId::from("group/project"));
    let iids: Vec<u64> = report
        .merge_requests
        .iter()
        .map(|m| m.merge_request_iid)
        .collect();
    assert_eq!(iids, vec![5, 3, 9]);
    assert!(report.merge_requests.iter().all(|m| m.dependencies.len() == 1));
    assert_eq!(service.transport().requests().len(), 3);
}

#[tokio::test]
async fn test_dependency_report_invalid_project_sends_nothing() {
    let service = MergeRequestDependenciesService::new(MockTransport::new(StatusCode::OK, "[]"));

    let result = service.dependency_report("/bad", &[1, 2], &[]).await;

    assert!(matches!(result, Err(ApiError::InvalidProjectId { .. })));
    assert!(service.transport().requests().is_empty());
}
