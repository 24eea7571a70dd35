use crate::shared::error::ApiError;
use crate::shared::ApiResult;
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;

/// Per-call options applied to a request before it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// Perform the call as another user (`Sudo` header, admin tokens only)
    Sudo(String),
    /// Adds an arbitrary header
    Header(String, String),
    /// Requests a specific page of a paginated collection
    Page(u32),
    /// Number of items per page
    PerPage(u32),
    /// Overrides the transport's default timeout for this call
    Timeout(Duration),
}

/// A request against the GitLab API, relative to the versioned API root.
///
/// `path` is expected to be already escaped; transports append it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Serializes `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Applies per-call options in order; later options win for timeouts.
    pub fn with_options(mut self, options: &[RequestOption]) -> Self {
        for option in options {
            match option {
                RequestOption::Sudo(user) => {
                    self.headers.push(("Sudo".to_string(), user.clone()));
                }
                RequestOption::Header(name, value) => {
                    self.headers.push((name.clone(), value.clone()));
                }
                RequestOption::Page(page) => {
                    self.query.push(("page".to_string(), page.to_string()));
                }
                RequestOption::PerPage(per_page) => {
                    self.query
                        .push(("per_page".to_string(), per_page.to_string()));
                }
                RequestOption::Timeout(timeout) => self.timeout = Some(*timeout),
            }
        }
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Last value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_request_is_bare() {
        let request = ApiRequest::new(Method::GET, "projects/1/merge_requests/2/blocks");
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "projects/1/merge_requests/2/blocks");
        assert!(request.query().is_empty());
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());
        assert!(request.timeout().is_none());
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Body {
            blocking_merge_request_id: u64,
        }

        let request = ApiRequest::new(Method::POST, "p")
            .json(&Body {
                blocking_merge_request_id: 9,
            })
            .unwrap();
        assert_eq!(
            request.body(),
            Some(&json!({"blocking_merge_request_id": 9}))
        );
    }

    #[test]
    fn test_json_body_encode_error() {
        use std::collections::HashMap;

        // non-string map keys cannot be represented in JSON
        let mut body = HashMap::new();
        body.insert(vec![1u8], 1);
        let result = ApiRequest::new(Method::POST, "p").json(&body);
        assert!(matches!(result, Err(ApiError::Encode(_))));
    }

    #[test]
    fn test_options_applied() {
        let request = ApiRequest::new(Method::GET, "p").with_options(&[
            RequestOption::Sudo("alice".to_string()),
            RequestOption::Header("X-Trace".to_string(), "abc".to_string()),
            RequestOption::Page(2),
            RequestOption::PerPage(50),
            RequestOption::Timeout(Duration::from_secs(5)),
        ]);

        assert_eq!(request.header("sudo"), Some("alice"));
        assert_eq!(request.header("x-trace"), Some("abc"));
        assert_eq!(
            request.query(),
            &[
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "50".to_string())
            ][..]
        );
        assert_eq!(request.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_last_timeout_wins() {
        let request = ApiRequest::new(Method::GET, "p").with_options(&[
            RequestOption::Timeout(Duration::from_secs(5)),
            RequestOption::Timeout(Duration::from_secs(1)),
        ]);
        assert_eq!(request.timeout(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_header_lookup_missing() {
        let request = ApiRequest::new(Method::GET, "p");
        assert!(request.header("Sudo").is_none());
    }
}
