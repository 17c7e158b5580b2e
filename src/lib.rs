//! SEO Autopilot client library
//!
//! Creates and inspects SEO monitoring projects stored in a managed
//! database/auth service (PostgREST rows plus password auth).
//!
//! ## Features
//!
//! - **Project Wizard**: six-step guided form with per-step completeness checks
//! - **Dependent Writes**: project, settings, keywords and competitors written in order
//! - **Dashboard Queries**: project listing with keyword/competitor/change counts
//! - **Sessions**: password sign-in with the session kept on disk
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seo_autopilot::{
//!     core::{load_session, session_path, Config},
//!     supabase::SupabaseClient,
//!     wizard::Wizard,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = load_session(&session_path()).ok_or("sign in first")?;
//! let client = SupabaseClient::new(Config::resolve(None, None)?)?.with_session(&session);
//!
//! let mut wizard = Wizard::new();
//! wizard.set_name("Acme");
//! wizard.set_website_url("https://acme.com");
//! wizard.next()?;
//! wizard.set_keyword(0, "seo tools")?;
//! wizard.next()?;
//! wizard.set_competitor_url(0, "https://x.com")?;
//! while wizard.can_proceed() {
//!     wizard.next()?;
//! }
//!
//! let project = wizard.create(&client).await?;
//! println!("created {}", project.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SUPABASE_URL=https://your-project.supabase.co
//! export SUPABASE_ANON_KEY=your-anon-key
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;
pub mod supabase;
pub mod wizard;

// Re-export commonly used types
pub use cli::types::{Device, MonitoringFrequency, ProjectId, UserId};
pub use error::{AutopilotError, Result};
pub use wizard::{Step, Wizard};

pub const SUPABASE_URL_ENV_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_ENV_VAR: &str = "SUPABASE_ANON_KEY";
pub const SESSION_FILE_ENV_VAR: &str = "SEO_AUTOPILOT_SESSION_FILE";
pub const LOG_ENV_VAR: &str = "SEO_AUTOPILOT_LOG";
