//! Service connection settings resolved from flags and environment

use crate::{AutopilotError, Result, SUPABASE_ANON_KEY_ENV_VAR, SUPABASE_URL_ENV_VAR};
use url::Url;

/// Where the database/auth service lives and the public key it expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: Url,
    pub anon_key: String,
}

impl Config {
    /// Build a config from explicit values. The base URL always ends up with
    /// a trailing slash so endpoint paths join beneath it.
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self> {
        let mut url = Url::parse(url.trim())?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            url,
            anon_key: anon_key.into(),
        })
    }

    /// Resolve from CLI flags, falling back to `SUPABASE_URL` and
    /// `SUPABASE_ANON_KEY`. Flags win over the environment.
    pub fn resolve(url: Option<String>, anon_key: Option<String>) -> Result<Self> {
        let url = resolve_value(url, SUPABASE_URL_ENV_VAR)?;
        let anon_key = resolve_value(anon_key, SUPABASE_ANON_KEY_ENV_VAR)?;
        Self::new(&url, anon_key)
    }

    /// Absolute URL of a service endpoint such as `rest/v1/projects`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.url.join(path.trim_start_matches('/'))?)
    }
}

fn resolve_value(value: Option<String>, env_var: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .filter(|v| !v.trim().is_empty())
        })
        .ok_or_else(|| AutopilotError::MissingConfig {
            env_var: env_var.to_string(),
        })
}
