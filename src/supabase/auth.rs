//! Password authentication against the auth endpoints

use reqwest::StatusCode;

use super::{
    check_response,
    types::{Credentials, Session, SignUp, User},
    SupabaseClient,
};
use crate::{AutopilotError, Result};


impl SupabaseClient {
    /// Exchange email and password for a session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let url = self.config.endpoint("auth/v1/token")?;
        tracing::debug!(email, "password sign-in");

        let res = self
            .http
            .post(url)
            .headers(self.headers()?)
            .query(&[("grant_type", "password")])
            .json(&Credentials { email, password })
            .send()
            .await?;

        let session = check_response(res).await?.json::<Session>().await?;
        Ok(session)
    }

    /// Register a new account.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUp> {
        let url = self.config.endpoint("auth/v1/signup")?;
        tracing::debug!(email, "sign-up");

        let res = self
            .http
            .post(url)
            .headers(self.headers()?)
            .json(&Credentials { email, password })
            .send()
            .await?;

        let sign_up = check_response(res).await?.json::<SignUp>().await?;
        Ok(sign_up)
    }

    /// The user behind the current access token.
    ///
    /// Fails with `NotAuthenticated` when no token is set or the service
    /// rejects it.
    pub async fn get_user(&self) -> Result<User> {
        if self.access_token.is_none() {
            return Err(AutopilotError::NotAuthenticated);
        }

        let url = self.config.endpoint("auth/v1/user")?;
        let res = self
            .http
            .get(url)
            .headers(self.headers()?)
            .send()
            .await?;

        if res.status() == StatusCode::UNAUTHORIZED || res.status() == StatusCode::FORBIDDEN {
            tracing::warn!(status = res.status().as_u16(), "access token rejected");
            return Err(AutopilotError::NotAuthenticated);
        }

        let user = check_response(res).await?.json::<User>().await?;
        Ok(user)
    }

    /// Revoke the current session on the service side.
    pub async fn sign_out(&self) -> Result<()> {
        if self.access_token.is_none() {
            return Ok(());
        }

        let url = self.config.endpoint("auth/v1/logout")?;
        let res = self
            .http
            .post(url)
            .headers(self.headers()?)
            .send()
            .await?;

        check_response(res).await?;
        Ok(())
    }
}
