//! Type-safe wrappers and enums for project data.

pub mod ids;
pub mod options;

pub use ids::{ProjectId, UserId};
pub use options::{Device, MonitoringFrequency};
