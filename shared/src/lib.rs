use serde::{Deserialize, Serialize};

pub mod protocol;

pub use protocol::{
    ApiRequest, AuthEnvelope, EnvelopeError, HttpMethod, ListSlotsRequest, LoginRequest,
    SignupRequest,
};

// =========================================================
// Constants
// =========================================================

pub const PATH_LOGIN: &str = "/auth/login";
pub const PATH_SIGNUP: &str = "/auth/signup";
pub const PATH_SLOTS: &str = "/slots";

// =========================================================
// Domain Models
// =========================================================

/// Profile returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            first_name: None,
            last_name: None,
            phone_number: None,
        }
    }
}

/// Authenticated identity held by the current browser tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// A bookable time interval.
///
/// Times are kept exactly as the backend formats them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: i64,
    pub start_time: String,
    pub end_time: String,
}

impl Slot {
    /// Row label, e.g. `06:00 - 07:00`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_from_backend_dto() {
        let json = r#"{"id":7,"email":"a@b.com","firstName":"Asha","lastName":"Rao","phoneNumber":null}"#;
        let user: User = serde_json_wasm::from_str(json).unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.first_name.as_deref(), Some("Asha"));
        assert_eq!(user.phone_number, None);
    }

    #[test]
    fn user_serializes_without_absent_fields() {
        let json = serde_json_wasm::to_string(&User::new("a@b.com")).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com"}"#);
    }

    #[test]
    fn slot_ignores_unknown_fields() {
        let json = r#"{"id":1,"startTime":"06:00","endTime":"07:00","available":true}"#;
        let slot: Slot = serde_json_wasm::from_str(json).unwrap();
        assert_eq!(slot.time_range(), "06:00 - 07:00");
    }
}
