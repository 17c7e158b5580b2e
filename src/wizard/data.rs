//! Form values collected across the wizard steps

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    cli::types::{Device, MonitoringFrequency},
    storage::{NewCompetitor, NewKeyword, NewProject, ProjectSettings, PROJECT_STATUS_ACTIVE},
    AutopilotError, ProjectId, Result, UserId,
};

/// Number of keyword input slots on the keywords step
pub const KEYWORD_SLOTS: usize = 3;

/// Number of competitor input slots on the competitors step
pub const COMPETITOR_SLOTS: usize = 3;

pub const DEFAULT_LOCATION: &str = "United States";

pub const DEFAULT_ALERT_THRESHOLD: u8 = 3;

/// Bounds of the rank-drop alert slider
pub const MIN_ALERT_THRESHOLD: u8 = 1;
pub const MAX_ALERT_THRESHOLD: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub location: String,
    pub device: Device,
}

impl Default for KeywordEntry {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            device: Device::Desktop,
        }
    }
}

impl KeywordEntry {
    pub fn is_filled(&self) -> bool {
        !self.keyword.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorEntry {
    pub url: String,
    /// Optional display name; blank means "use the URL's hostname"
    pub name: String,
}

impl CompetitorEntry {
    pub fn is_filled(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Stored name: the typed name, or the hostname when left blank.
    pub fn resolved_name(&self) -> Result<String> {
        if !self.name.trim().is_empty() {
            return Ok(self.name.clone());
        }
        hostname(&self.url)
    }
}

/// Host part of a URL (`https://www.x.com/a` gives `www.x.com`).
///
/// URLs without a host, such as `mailto:a@b.c`, give an empty name.
pub fn hostname(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| AutopilotError::InvalidUrl {
        url: url.to_string(),
    })?;
    Ok(parsed.host_str().unwrap_or_default().to_string())
}

/// Everything the wizard collects before submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardData {
    pub name: String,
    pub website_url: String,
    pub keywords: Vec<KeywordEntry>,
    pub competitors: Vec<CompetitorEntry>,
    pub frequency: MonitoringFrequency,
    pub alert_threshold: u8,
    pub alert_on_competitor_changes: bool,
    pub alert_on_new_content_gaps: bool,
}

impl Default for WizardData {
    fn default() -> Self {
        Self {
            name: String::new(),
            website_url: String::new(),
            keywords: vec![KeywordEntry::default(); KEYWORD_SLOTS],
            competitors: vec![CompetitorEntry::default(); COMPETITOR_SLOTS],
            frequency: MonitoringFrequency::Weekly,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            alert_on_competitor_changes: true,
            alert_on_new_content_gaps: true,
        }
    }
}

impl WizardData {
    pub fn has_project_info(&self) -> bool {
        !self.name.trim().is_empty() && !self.website_url.trim().is_empty()
    }

    pub fn has_keyword(&self) -> bool {
        self.keywords.iter().any(KeywordEntry::is_filled)
    }

    pub fn has_competitor(&self) -> bool {
        self.competitors.iter().any(CompetitorEntry::is_filled)
    }

    pub fn filled_keywords(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.keywords.iter().filter(|k| k.is_filled())
    }

    pub fn filled_competitors(&self) -> impl Iterator<Item = &CompetitorEntry> {
        self.competitors.iter().filter(|c| c.is_filled())
    }

    pub fn project_row(&self, user_id: UserId) -> NewProject {
        NewProject {
            user_id,
            name: self.name.clone(),
            website_url: self.website_url.clone(),
            status: PROJECT_STATUS_ACTIVE.to_string(),
        }
    }

    pub fn settings_row(&self, project_id: ProjectId) -> ProjectSettings {
        ProjectSettings {
            project_id,
            monitoring_frequency: self.frequency,
            alert_rank_drop_threshold: self.alert_threshold,
            alert_on_competitor_changes: self.alert_on_competitor_changes,
            alert_on_new_content_gaps: self.alert_on_new_content_gaps,
        }
    }

    /// Rows for every keyword slot with text; the text is stored as typed.
    pub fn keyword_rows(&self, project_id: ProjectId) -> Vec<NewKeyword> {
        self.filled_keywords()
            .map(|k| NewKeyword {
                project_id,
                keyword: k.keyword.clone(),
                location: k.location.clone(),
                device: k.device,
            })
            .collect()
    }

    /// Rows for every competitor slot with a URL. Fails on the first blank
    /// name whose URL has no parseable hostname.
    pub fn competitor_rows(&self, project_id: ProjectId) -> Result<Vec<NewCompetitor>> {
        self.filled_competitors()
            .map(|c| {
                Ok(NewCompetitor {
                    project_id,
                    url: c.url.clone(),
                    name: c.resolved_name()?,
                })
            })
            .collect()
    }
}
