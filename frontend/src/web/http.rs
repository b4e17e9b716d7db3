//! HTTP transport
//!
//! `HttpClient` decouples the API client from the concrete transport: the
//! browser build sends through `gloo-net`, tests through a recording mock.

use async_trait::async_trait;
use gloo_net::http::Request;
use turf_shared::HttpMethod;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    /// Request could not be built
    RequestBuildFailed(String),
    /// Network failure (request rejected or host unreachable)
    NetworkError(String),
    /// Response body could not be read
    ResponseParseFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "request build failed: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "network error: {}", msg),
            HttpError::ResponseParseFailed(msg) => write!(f, "response read failed: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Transport-level request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    #[cfg(test)]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Transport-level response: status plus the whole body as text.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `?Send` because browser futures hold `JsValue`s.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

// =========================================================
// Browser client
// =========================================================

/// `fetch` through `gloo-net`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooHttpClient;

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };

        if !req.query.is_empty() {
            builder = builder.query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let response = match req.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| HttpError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::ResponseParseFailed(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays queued responses in order and records every request it sees.
    #[derive(Default)]
    pub struct MockHttpClient {
        responses: RefCell<VecDeque<Result<HttpResponse, HttpError>>>,
        pub requests: RefCell<Vec<HttpRequest>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, message: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(HttpError::NetworkError(message.to_string())));
            self
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.requests.borrow().last().cloned()
        }
    }

    #[async_trait(?Send)]
    impl HttpClient for MockHttpClient {
        async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.requests.borrow_mut().push(req);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(HttpError::NetworkError("no mocked response".into())))
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest::new("http://x", HttpMethod::Get)
            .with_header("Authorization", "Bearer t");
        assert_eq!(req.header("authorization"), Some("Bearer t"));
        assert_eq!(req.header("Content-Type"), None);
    }

    #[test]
    fn only_2xx_is_ok() {
        let resp = |status| HttpResponse {
            status,
            body: String::new(),
        };
        assert!(resp(200).ok());
        assert!(resp(201).ok());
        assert!(!resp(401).ok());
        assert!(!resp(500).ok());
    }
}
