#![allow(dead_code)]

use async_trait::async_trait;
use gitlab_mr_deps::prelude::*;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock ApiTransport returning a canned response and recording every request
pub struct RecordingTransport {
    status: StatusCode,
    body: String,
    fail_with: Option<String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            fail_with: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A transport that fails every call before reaching the server
    pub fn unreachable(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new(200, "")
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let method: Method = request.method().clone();
        let url = format!("https://gitlab.example.com/api/v4/{}", request.path());
        self.requests.lock().unwrap().push(request);

        if let Some(ref message) = self.fail_with {
            return Err(ApiError::Transport {
                url,
                message: message.clone(),
                source: message.clone().into(),
            });
        }

        Ok(RawResponse::new(
            Response::new(method, url, self.status, HeaderMap::new()),
            self.body.clone().into_bytes(),
        ))
    }
}

/// JSON for one dependency record as GitLab returns it
pub fn dependency_json(id: u64, blocking_iid: u64, state: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "project_id": 7,
        "blocking_merge_request": {
            "id": 500 + blocking_iid,
            "iid": blocking_iid,
            "project_id": 7,
            "title": format!("Blocker {}", blocking_iid),
            "state": state,
            "created_at": "2024-05-14T18:56:36.461Z",
            "updated_at": "2024-05-14T19:10:02.000Z",
            "author": {"id": 1, "username": "root", "name": "Administrator"},
            "references": {
                "short": format!("!{}", blocking_iid),
                "relative": format!("!{}", blocking_iid),
                "full": format!("group/project!{}", blocking_iid)
            }
        }
    })
}
