use crate::{PATH_LOGIN, PATH_SIGNUP, PATH_SLOTS, Session, Slot, User};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the API base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// Query string pairs. Only GET requests use them; everything else sends a JSON body.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// =========================================================
// Request Definitions
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthEnvelope;
    const PATH: &'static str = PATH_LOGIN;
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    // The backend rejects duplicate phone numbers, so a blank one must be absent rather than ""
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ApiRequest for SignupRequest {
    type Response = AuthEnvelope;
    const PATH: &'static str = PATH_SIGNUP;
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List the slots offered on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSlotsRequest {
    pub date: NaiveDate,
}

impl ApiRequest for ListSlotsRequest {
    type Response = Vec<Slot>;
    const PATH: &'static str = PATH_SLOTS;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("date", self.date.format("%Y-%m-%d").to_string())]
    }
}

// =========================================================
// Auth Envelope
// =========================================================

/// `{ success, message?, token?, user? }` wrapper returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Why an envelope could not be turned into a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// `success: false`, with the server's explanation if it sent one.
    Rejected(Option<String>),
    /// `success: true` but a required field is missing or empty.
    MissingField(&'static str),
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeError::Rejected(Some(msg)) => write!(f, "rejected by server: {}", msg),
            EnvelopeError::Rejected(None) => write!(f, "rejected by server"),
            EnvelopeError::MissingField(field) => {
                write!(f, "successful response without `{}`", field)
            }
        }
    }
}

impl std::error::Error for EnvelopeError {}

impl AuthEnvelope {
    pub fn into_session(self) -> Result<Session, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(self.message));
        }
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or(EnvelopeError::MissingField("token"))?;
        let user = self.user.ok_or(EnvelopeError::MissingField("user"))?;
        Ok(Session { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> AuthEnvelope {
        serde_json_wasm::from_str(json).unwrap()
    }

    #[test]
    fn successful_envelope_becomes_session() {
        let envelope = decode(
            r#"{"success":true,"message":"Login successful","token":"t-1","user":{"id":1,"email":"a@b.com"}}"#,
        );
        let session = envelope.into_session().unwrap();
        assert_eq!(session.token, "t-1");
        assert_eq!(session.user.email, "a@b.com");
    }

    #[test]
    fn failed_envelope_keeps_server_message() {
        let envelope = decode(r#"{"success":false,"message":"Invalid password"}"#);
        assert_eq!(
            envelope.into_session(),
            Err(EnvelopeError::Rejected(Some("Invalid password".to_string())))
        );
    }

    #[test]
    fn success_without_token_is_incomplete() {
        let envelope = decode(r#"{"success":true,"token":"","user":{"email":"a@b.com"}}"#);
        assert_eq!(
            envelope.into_session(),
            Err(EnvelopeError::MissingField("token"))
        );

        let envelope = decode(r#"{"success":true,"token":"t"}"#);
        assert_eq!(
            envelope.into_session(),
            Err(EnvelopeError::MissingField("user"))
        );
    }

    #[test]
    fn signup_body_omits_blank_phone() {
        let req = SignupRequest {
            email: "a@b.com".into(),
            password: "pw".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            phone_number: None,
        };
        let json = serde_json_wasm::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"email":"a@b.com","password":"pw","firstName":"Asha","lastName":"Rao"}"#
        );
    }

    #[test]
    fn slot_listing_query_uses_iso_date() {
        let req = ListSlotsRequest {
            date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
        };
        assert_eq!(req.query(), vec![("date", "2026-02-15".to_string())]);
        assert_eq!(ListSlotsRequest::METHOD, HttpMethod::Get);
    }
}
