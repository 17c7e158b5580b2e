//! Row models for the collections the wizard and dashboard touch

use crate::cli::types::{Device, MonitoringFrequency, ProjectId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status written on every project the wizard creates
pub const PROJECT_STATUS_ACTIVE: &str = "active";

/// A monitored website as stored in `projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub user_id: UserId,
    pub name: String,
    pub website_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload for `projects`; id and timestamps come from the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub user_id: UserId,
    pub name: String,
    pub website_url: String,
    pub status: String,
}

/// One row per project in `project_settings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub project_id: ProjectId,
    pub monitoring_frequency: MonitoringFrequency,
    pub alert_rank_drop_threshold: u8,
    pub alert_on_competitor_changes: bool,
    pub alert_on_new_content_gaps: bool,
}

/// A tracked search keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: Uuid,
    pub project_id: ProjectId,
    pub keyword: String,
    pub location: Option<String>,
    pub device: Device,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewKeyword {
    pub project_id: ProjectId,
    pub keyword: String,
    pub location: String,
    pub device: Device,
}

/// A competitor site watched alongside the project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: Uuid,
    pub project_id: ProjectId,
    pub url: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCompetitor {
    pub project_id: ProjectId,
    pub url: String,
    pub name: String,
}

/// Rank-change event computed elsewhere; read-only here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerpChange {
    pub id: Uuid,
    pub project_id: ProjectId,
    pub keyword_id: Uuid,
    pub url: String,
    pub change_type: String,
    pub position_before: Option<i32>,
    pub position_after: Option<i32>,
    pub position_change: Option<i32>,
    pub detected_at: DateTime<Utc>,
}

/// Row counts shown next to each project on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub keywords: u64,
    pub competitors: u64,
    pub changes: u64,
}
