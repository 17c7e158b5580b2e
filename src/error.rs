//! Error types for the SEO Autopilot client

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, AutopilotError>;

/// Message shown when a failure carries no text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to create project";

#[derive(Error, Debug)]
pub enum AutopilotError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid service URL: {0}")]
    InvalidServiceUrl(#[from] url::ParseError),

    #[error("{env_var} not provided and environment variable not set")]
    MissingConfig { env_var: String },

    #[error("Not authenticated")]
    NotAuthenticated,

    /// Error body returned by the database or auth service.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Invalid id: {id}")]
    InvalidId { id: String },

    /// Form input rejected before anything was written.
    #[error("{0}")]
    Form(String),

    #[error("Service returned no data")]
    NoData,
}

impl AutopilotError {
    /// Human-readable message for inline display, never empty.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}
