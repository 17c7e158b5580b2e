//! Core utilities for the SEO Autopilot client
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `config`: service URL and key resolution
//! - `http`: request headers and response header parsing
//! - `session`: session file persistence

pub mod config;
pub mod http;
pub mod session;

// Re-export commonly used items for convenience
pub use config::Config;
pub use http::{parse_content_range_total, service_headers};
pub use session::{clear_session, load_session, save_session, session_path};
