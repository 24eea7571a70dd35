use super::{ApiRequest, RawResponse};
use crate::shared::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;

/// ApiTransport port for sending requests to the GitLab API
///
/// This port abstracts the shared HTTP client: authentication, base URL,
/// timeouts and connection reuse are the implementation's concern. Services
/// only build requests and interpret the returned status and body.
///
/// # Async Support
/// Implementations must be `Send + Sync` so a single transport can serve
/// concurrent calls.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends one request and returns the response without checking its status
    ///
    /// # Errors
    /// Returns `ApiError::Transport` if no response was received
    /// (connection failure, timeout, invalid URL).
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse>;
}

#[async_trait]
impl<T: ApiTransport + ?Sized> ApiTransport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        (**self).send(request).await
    }
}
