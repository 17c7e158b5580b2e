use crate::cli::types::UserId;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Authenticated user as returned by `/auth/v1/user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

/// Token pair issued by the auth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Sign-up answers with a session when the project auto-confirms
/// accounts, otherwise with the bare user awaiting email confirmation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignUp {
    Session(Session),
    ConfirmationPending(User),
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Error body shared by the REST and auth endpoints.
///
/// REST errors carry `message`/`details`/`hint`, auth errors use
/// `error_description` or `msg`; all fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl ApiErrorBody {
    /// First non-empty human-readable field.
    pub fn message(&self) -> Option<&str> {
        [
            &self.message,
            &self.msg,
            &self.error_description,
            &self.error,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .find(|text| !text.trim().is_empty())
    }
}

/// Extract a display message from a raw error response body.
pub fn error_message_from_body(body: &str, status: u16) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => match parsed.message() {
            Some(message) => message.to_string(),
            None => fallback_message(body, status),
        },
        Err(_) => fallback_message(body, status),
    }
}

fn fallback_message(body: &str, status: u16) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        trimmed.to_string()
    }
}
