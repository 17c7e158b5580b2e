//! Session persistence on the local file system
//!
//! The signed-in session is kept as JSON so later commands can act as the
//! same user without logging in again.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{supabase::types::Session, Result, SESSION_FILE_ENV_VAR};

/// Path: `$SEO_AUTOPILOT_SESSION_FILE` or `~/.config/seo-autopilot/session.json`
pub fn session_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SESSION_FILE_ENV_VAR) {
        return PathBuf::from(path);
    }

    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("seo-autopilot").join("session.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Load the stored session; missing or unreadable files count as signed out.
pub fn load_session(path: &Path) -> Option<Session> {
    let raw = try_read_to_string(path)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "ignoring unreadable session file");
            None
        }
    }
}

pub fn save_session(path: &Path, session: &Session) -> Result<()> {
    let raw = serde_json::to_string_pretty(session)?;
    write_string(path, &raw)?;
    tracing::debug!(path = %path.display(), "session saved");
    Ok(())
}

/// Remove the stored session. Returns whether a file was deleted.
pub fn clear_session(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
