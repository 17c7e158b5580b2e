//! Command implementations for the SEO Autopilot CLI

pub mod auth;
pub mod common;
pub mod new_project;
pub mod projects;


pub use common::CommandContext;
