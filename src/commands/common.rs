//! Common resources shared across command handlers.

use std::path::PathBuf;

use crate::{
    cli::ServiceArgs,
    core::{load_session, session_path, Config},
    supabase::{Session, SupabaseClient},
    AutopilotError, Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub config: Config,
    pub session_path: PathBuf,
    pub session: Option<Session>,
}

impl CommandContext {
    /// Resolve service settings and pick up the stored session, if any.
    pub fn new(service: &ServiceArgs) -> Result<Self> {
        let config = Config::resolve(service.url.clone(), service.anon_key.clone())?;
        Ok(Self::with_session_path(config, session_path()))
    }

    pub fn with_session_path(config: Config, session_path: PathBuf) -> Self {
        let session = load_session(&session_path);
        tracing::debug!(
            path = %session_path.display(),
            signed_in = session.is_some(),
            "command context ready"
        );
        Self {
            config,
            session_path,
            session,
        }
    }

    /// Client acting as the anonymous role.
    pub fn anon_client(&self) -> Result<SupabaseClient> {
        SupabaseClient::new(self.config.clone())
    }

    /// Client acting as the signed-in user; `NotAuthenticated` without a session.
    pub fn user_client(&self) -> Result<SupabaseClient> {
        let session = self.session.as_ref().ok_or(AutopilotError::NotAuthenticated)?;
        Ok(self.anon_client()?.with_session(session))
    }
}
