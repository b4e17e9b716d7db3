use crate::web::{GlooHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use leptos::prelude::*;
use serde::Serialize;
use std::fmt;
use turf_shared::{
    ApiRequest, AuthEnvelope, EnvelopeError, HttpMethod, ListSlotsRequest, LoginRequest, Session,
    SignupRequest, Slot,
};

// =========================================================
// Errors
// =========================================================

/// Failure at the API boundary
#[derive(Debug)]
pub enum ApiError {
    /// Request never got an answer
    Transport(HttpError),
    /// Non-2xx answer without a usable body
    Status(u16),
    /// Body did not match the expected shape
    Decode(String),
    /// Envelope with `success: false`
    Rejected(Option<String>),
    /// Envelope with `success: true` but missing a field
    Incomplete(&'static str),
    /// Request body could not be encoded
    Encode(String),
}

impl ApiError {
    /// The one line shown to the user: the server's explanation when it gave one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(Some(msg)) if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "{}", e),
            ApiError::Status(code) => write!(f, "unexpected status {}", code),
            ApiError::Decode(msg) => write!(f, "malformed response: {}", msg),
            ApiError::Rejected(Some(msg)) => write!(f, "rejected: {}", msg),
            ApiError::Rejected(None) => write!(f, "rejected"),
            ApiError::Incomplete(field) => write!(f, "response is missing `{}`", field),
            ApiError::Encode(msg) => write!(f, "request encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Transport(e)
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(e: EnvelopeError) -> Self {
        match e {
            EnvelopeError::Rejected(msg) => ApiError::Rejected(msg),
            EnvelopeError::MissingField(field) => ApiError::Incomplete(field),
        }
    }
}

// =========================================================
// Client
// =========================================================

/// Booking backend client.
///
/// Built once with the base URL and shared; `with_token` derives a copy that
/// authenticates its requests.
#[derive(Clone, Debug, PartialEq)]
pub struct TurfApi<C = GlooHttpClient> {
    base_url: String,
    token: Option<String>,
    client: C,
}

impl<C: HttpClient> TurfApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
            client,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        let req = HttpRequest::new(self.url(path), method).with_header("Accept", "application/json");
        match &self.token {
            Some(token) => req.with_header("Authorization", &format!("Bearer {}", token)),
            None => req,
        }
    }

    /// `GET base/path?params`
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<HttpResponse, ApiError> {
        let req = params
            .iter()
            .fold(self.request(HttpMethod::Get, path), |req, (k, v)| {
                req.with_query(k, v)
            });
        Ok(self.client.send(req).await?)
    }

    /// `POST base/path` with a JSON body
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let body = serde_json_wasm::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let req = self
            .request(HttpMethod::Post, path)
            .with_header("Content-Type", "application/json")
            .with_body(body);
        Ok(self.client.send(req).await?)
    }

    /// Issue a typed request and return the raw response, whatever its status.
    async fn dispatch<R: ApiRequest>(&self, req: &R) -> Result<HttpResponse, ApiError> {
        match R::METHOD {
            HttpMethod::Get => {
                let query = req.query();
                let params: Vec<(&str, &str)> =
                    query.iter().map(|(k, v)| (*k, v.as_str())).collect();
                self.get(R::PATH, &params).await
            }
            HttpMethod::Post => self.post(R::PATH, req).await,
        }
    }

    /// Issue a typed request that must answer 2xx with `R::Response`.
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let response = self.dispatch(req).await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status));
        }
        serde_json_wasm::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Auth endpoints answer failures with an envelope too (401/400), so the
    /// body is read regardless of status.
    async fn authenticate<R>(&self, req: &R) -> Result<Session, ApiError>
    where
        R: ApiRequest<Response = AuthEnvelope>,
    {
        let response = self.dispatch(req).await?;
        let envelope: AuthEnvelope = match serde_json_wasm::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(e) if response.ok() => return Err(ApiError::Decode(e.to_string())),
            Err(_) => return Err(ApiError::Status(response.status)),
        };
        Ok(envelope.into_session()?)
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<Session, ApiError> {
        self.authenticate(req).await
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<Session, ApiError> {
        self.authenticate(req).await
    }

    pub async fn slots(&self, date: NaiveDate) -> Result<Vec<Slot>, ApiError> {
        self.send(&ListSlotsRequest { date }).await
    }
}

/// API client provided by `App`
pub fn use_api() -> TurfApi {
    use_context::<TurfApi>().expect("TurfApi should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::tests::MockHttpClient;

    fn api(client: MockHttpClient) -> TurfApi<MockHttpClient> {
        TurfApi::new("http://localhost:8080/api/", client)
    }

    fn login_req() -> LoginRequest {
        LoginRequest {
            email: "a@b.com".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn login_posts_json_to_auth_endpoint() {
        let api = api(MockHttpClient::new().respond(
            200,
            r#"{"success":true,"token":"t-9","user":{"email":"a@b.com"}}"#,
        ));

        let session = api.login(&login_req()).await.unwrap();
        assert_eq!(session.token, "t-9");

        let sent = api.client.last_request().unwrap();
        assert_eq!(sent.url, "http://localhost:8080/api/auth/login");
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(sent.header("Authorization"), None);
        assert_eq!(
            sent.body.as_deref(),
            Some(r#"{"email":"a@b.com","password":"secret"}"#)
        );
    }

    #[tokio::test]
    async fn unauthorized_envelope_is_a_rejection() {
        let api = api(MockHttpClient::new().respond(401, r#"{"success":false,"message":"User not found"}"#));

        let err = api.login(&login_req()).await.unwrap_err();
        assert_eq!(err.user_message("fallback"), "User not found");
    }

    #[tokio::test]
    async fn non_envelope_error_body_falls_back() {
        let api = api(MockHttpClient::new().respond(502, "<html>Bad Gateway</html>"));

        let err = api.login(&login_req()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(502)));
        assert_eq!(err.user_message("Login failed."), "Login failed.");
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let api = api(MockHttpClient::new().respond(200, "[]"));
        let err = api.login(&login_req()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn success_without_user_is_incomplete() {
        let api = api(MockHttpClient::new().respond(200, r#"{"success":true,"token":"t"}"#));
        let err = api.login(&login_req()).await.unwrap_err();
        assert!(matches!(err, ApiError::Incomplete("user")));
    }

    #[tokio::test]
    async fn transport_failure_is_classified() {
        let api = api(MockHttpClient::new().fail("connection refused"));
        let err = api.login(&login_req()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(HttpError::NetworkError(_))));
        assert_eq!(err.user_message("Login failed."), "Login failed.");
    }

    #[tokio::test]
    async fn slots_are_fetched_with_date_and_token() {
        let api = api(MockHttpClient::new().respond(
            200,
            r#"[{"id":1,"startTime":"06:00","endTime":"07:00"}]"#,
        ))
        .with_token(Some("t-1".into()));

        let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let slots = api.slots(date).await.unwrap();
        assert_eq!(slots.len(), 1);

        let sent = api.client.last_request().unwrap();
        assert_eq!(sent.url, "http://localhost:8080/api/slots");
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.query, vec![("date".to_string(), "2026-02-15".to_string())]);
        assert_eq!(sent.header("Authorization"), Some("Bearer t-1"));
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn listing_requires_success_status() {
        let api = api(MockHttpClient::new().respond(500, r#"{"error":"boom"}"#));
        let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        assert!(matches!(api.slots(date).await, Err(ApiError::Status(500))));
    }

    #[test]
    fn relative_paths_are_joined_once() {
        let api = api(MockHttpClient::new());
        assert_eq!(api.base_url(), "http://localhost:8080/api");
        assert_eq!(api.url("slots"), "http://localhost:8080/api/slots");
        assert_eq!(api.url("/slots"), "http://localhost:8080/api/slots");
    }
}
