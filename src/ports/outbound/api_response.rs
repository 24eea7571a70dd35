use crate::shared::error::ApiError;
use crate::shared::ApiResult;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Metadata of a GitLab API response, including offset pagination headers.
#[derive(Debug, Clone)]
pub struct Response {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub total_items: Option<u64>,
    pub total_pages: Option<u64>,
    pub items_per_page: Option<u64>,
    pub current_page: Option<u64>,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
}

impl Response {
    pub fn new(method: Method, url: String, status: StatusCode, headers: HeaderMap) -> Self {
        let header_number = |name: &str| -> Option<u64> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
        };

        Self {
            total_items: header_number("x-total"),
            total_pages: header_number("x-total-pages"),
            items_per_page: header_number("x-per-page"),
            current_page: header_number("x-page"),
            next_page: header_number("x-next-page"),
            previous_page: header_number("x-prev-page"),
            method,
            url,
            status,
            headers,
        }
    }
}

/// A response as received by a transport: metadata plus the unread body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub response: Response,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(response: Response, body: Vec<u8>) -> Self {
        Self { response, body }
    }

    /// Checks the status and discards the body.
    ///
    /// # Errors
    /// Returns `ApiError::Status` for any non-2xx status.
    pub fn into_response(self) -> ApiResult<Response> {
        self.check_status()?;
        Ok(self.response)
    }

    /// Checks the status and decodes the body as JSON.
    ///
    /// # Errors
    /// Returns `ApiError::Status` for a non-2xx status and
    /// `ApiError::Decode` if the body does not match `T`.
    pub fn decode_json<T: DeserializeOwned>(self) -> ApiResult<(T, Response)> {
        self.check_status()?;
        match serde_json::from_slice(&self.body) {
            Ok(value) => Ok((value, self.response)),
            Err(source) => Err(ApiError::Decode {
                response: Box::new(self.response),
                source,
            }),
        }
    }

    fn check_status(&self) -> ApiResult<()> {
        if self.response.status.is_success() {
            return Ok(());
        }

        Err(ApiError::Status {
            response: Box::new(self.response.clone()),
            message: error_message(&self.body, self.response.status),
        })
    }
}

/// Extracts a readable message from a GitLab error body.
///
/// GitLab answers with `{"message": ...}` (a string, or an object of field
/// errors) or, for OAuth failures, `{"error": ..., "error_description": ...}`.
fn error_message(body: &[u8], status: StatusCode) -> String {
    let fallback = || {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() {
            status.to_string()
        } else {
            text.chars().take(200).collect()
        }
    };

    let Ok(json) = serde_json::from_slice::<Value>(body) else {
        return fallback();
    };

    match (json.get("message"), json.get("error")) {
        (Some(Value::String(message)), _) => message.clone(),
        (Some(message), _) => flatten_message(message),
        (None, Some(Value::String(error))) => match json.get("error_description") {
            Some(Value::String(description)) => format!("{}: {}", error, description),
            _ => error.clone(),
        },
        _ => fallback(),
    }
}

/// `{"title": ["is too long"]}` -> `title: is too long`
fn flatten_message(message: &Value) -> String {
    match message {
        Value::Object(fields) => fields
            .iter()
            .map(|(field, errors)| format!("{}: {}", field, flatten_message(errors)))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Array(items) => items
            .iter()
            .map(flatten_message)
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
