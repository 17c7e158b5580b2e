//! Client for the managed database/auth service
//!
//! - `rest`: row insert/select/count against the PostgREST endpoints
//! - `auth`: password sign-in, sign-up, current user and sign-out
//! - `types`: wire types shared by both

pub mod auth;
pub mod rest;
pub mod types;

use reqwest::{header::HeaderMap, Client, Response};

use crate::{
    core::{http::service_headers, Config},
    AutopilotError, Result,
};
use types::error_message_from_body;

pub use rest::Query;
pub use types::{Session, SignUp, User};

/// HTTP client bound to one service project and, once signed in, one user
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    config: Config,
    access_token: Option<String>,
}

impl SupabaseClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("seo-autopilot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config,
            access_token: None,
        })
    }

    /// Act as the session's user on subsequent calls.
    pub fn with_session(mut self, session: &Session) -> Self {
        self.access_token = Some(session.access_token.clone());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap> {
        service_headers(&self.config.anon_key, self.access_token.as_deref())
    }
}

/// Pass successful responses through; turn error bodies into `Api` errors.
pub(crate) async fn check_response(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    let message = error_message_from_body(&body, status.as_u16());
    tracing::warn!(status = status.as_u16(), %message, "service request failed");
    Err(AutopilotError::Api {
        status: status.as_u16(),
        message,
    })
}
