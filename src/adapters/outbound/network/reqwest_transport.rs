use crate::ports::outbound::{ApiRequest, ApiTransport, RawResponse, Response};
use crate::shared::error::ApiError;
use crate::shared::{ApiResult, Result};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// ReqwestTransport adapter for talking to a GitLab instance over HTTP
///
/// This adapter implements the ApiTransport port on top of an async reqwest
/// client. It owns everything shared between calls: the API root URL, the
/// `PRIVATE-TOKEN` header and the default timeout.
///
/// Requests are sent once; there is no retry or rate limiting at this layer.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    timeout: Duration,
}

impl ReqwestTransport {
    const API_PATH: &'static str = "api/v4";
    const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Creates a transport for the GitLab instance at `base_url`
    ///
    /// `base_url` may be the instance root (`https://gitlab.com`) or the API
    /// root (`https://gitlab.com/api/v4`).
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("gitlab-mr-deps/{}", version);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: Self::api_root(base_url)?,
            token,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECONDS),
        })
    }

    /// Default timeout for calls that do not pass `RequestOption::Timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn api_root(base_url: &str) -> Result<Url> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed)
            .map_err(|e| anyhow::anyhow!("Invalid GitLab URL '{}': {}", base_url, e))?;
        if parsed.query().is_some() || parsed.fragment().is_some() {
            anyhow::bail!(
                "Invalid GitLab URL '{}': query strings and fragments are not supported",
                base_url
            );
        }

        let root = if trimmed.ends_with(Self::API_PATH) {
            format!("{}/", trimmed)
        } else {
            format!("{}/{}/", trimmed, Self::API_PATH)
        };

        let url = Url::parse(&root)
            .map_err(|e| anyhow::anyhow!("Invalid GitLab URL '{}': {}", base_url, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "Invalid GitLab URL '{}': only http and https are supported",
                base_url
            );
        }
        Ok(url)
    }

    /// Joins the escaped request path onto the API root.
    ///
    /// String concatenation instead of `Url::join` so percent-encoded
    /// slashes in project paths stay encoded.
    fn request_url(&self, request: &ApiRequest) -> ApiResult<Url> {
        let raw = format!("{}{}", self.base_url, request.path());
        let mut url = Url::parse(&raw).map_err(|e| ApiError::Transport {
            url: raw.clone(),
            message: format!("invalid request URL: {}", e),
            source: Box::new(e),
        })?;

        if !request.query().is_empty() {
            url.query_pairs_mut()
                .extend_pairs(request.query().iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let url = self.request_url(&request)?;
        let method = request.method().clone();

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .timeout(request.timeout().unwrap_or(self.timeout));

        if let Some(ref token) = self.token {
            builder = builder.header("PRIVATE-TOKEN", token.as_str());
        }
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        tracing::debug!(%method, %url, "sending GitLab API request");

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(&url, e))?;

        tracing::debug!(%method, %url, %status, bytes = body.len(), "received GitLab API response");

        Ok(RawResponse::new(
            Response::new(method, url.to_string(), status, headers),
            body.to_vec(),
        ))
    }
}

fn transport_error(url: &Url, error: reqwest::Error) -> ApiError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else if error.is_builder() {
        "invalid request".to_string()
    } else {
        error.to_string()
    };

    ApiError::Transport {
        url: url.to_string(),
        message,
        source: Box::new(error),
    }
}
