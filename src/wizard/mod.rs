//! Multi-step project creation wizard.
//!
//! The wizard walks six fixed steps in order: project info, keywords,
//! competitors, monitoring frequency, alerts and a final review. "Next" only
//! advances when the current step's required fields are filled, "Back" always
//! works except on the first step, and only the review step can create the
//! project.
//!
//! Creating a project writes four collections one after another through a
//! [`Store`](crate::storage::Store): the project, its settings, its keywords
//! and its competitors. Each write depends on the project id from the first
//! one. A failure stops the sequence where it is; rows written before the
//! failure stay written, and submitting again creates another project.
//!
//! ```rust
//! use seo_autopilot::wizard::{Step, Wizard};
//!
//! let mut wizard = Wizard::new();
//! assert!(!wizard.can_proceed());
//!
//! wizard.set_name("Acme");
//! wizard.set_website_url("https://acme.com");
//! assert_eq!(wizard.next().unwrap(), Step::Keywords);
//! assert_eq!(wizard.back().unwrap(), Step::ProjectInfo);
//! ```

pub mod data;
pub mod review;
pub mod submit;


use std::fmt;

use thiserror::Error;

use crate::{
    cli::types::{Device, MonitoringFrequency},
    storage::{Project, Store},
    AutopilotError,
};

pub use data::{CompetitorEntry, KeywordEntry, WizardData};
pub use review::Review;
pub use submit::submit_project;

/// Wizard steps in the order they are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    #[default]
    ProjectInfo,
    Keywords,
    Competitors,
    Frequency,
    Alerts,
    Review,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::ProjectInfo,
        Step::Keywords,
        Step::Competitors,
        Step::Frequency,
        Step::Alerts,
        Step::Review,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn from_number(number: usize) -> Option<Step> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::ProjectInfo => "Project Info",
            Step::Keywords => "Keywords",
            Step::Competitors => "Competitors",
            Step::Frequency => "Frequency",
            Step::Alerts => "Alerts",
            Step::Review => "Review",
        }
    }

    pub fn next(&self) -> Option<Step> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Step> {
        Self::from_number(self.number() - 1)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {} - {}", self.number(), Self::COUNT, self.title())
    }
}

#[derive(Error, Debug)]
pub enum WizardError {
    /// Required fields on this step are still blank.
    #[error("{} is incomplete", .0.title())]
    Incomplete(Step),

    #[error("already at the first step")]
    AtFirstStep,

    #[error("no step after review; create the project instead")]
    AtLastStep,

    #[error("projects can only be created from the review step (currently on {0})")]
    NotAtReview(Step),

    #[error("{kind} slot {index} does not exist (only {slots} available)")]
    SlotOutOfRange {
        kind: &'static str,
        index: usize,
        slots: usize,
    },

    #[error(transparent)]
    Submission(#[from] AutopilotError),
}

impl From<WizardError> for AutopilotError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::Submission(inner) => inner,
            other => AutopilotError::Form(other.to_string()),
        }
    }
}

/// Step position plus the form data of one wizard session
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    data: WizardData,
    error: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn data(&self) -> &WizardData {
        &self.data
    }

    /// Message from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether "Next" is enabled on the current step.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            Step::ProjectInfo => self.data.has_project_info(),
            Step::Keywords => self.data.has_keyword(),
            Step::Competitors => self.data.has_competitor(),
            Step::Frequency | Step::Alerts => true,
            Step::Review => false,
        }
    }

    /// Whether "Back" is enabled on the current step.
    pub fn can_go_back(&self) -> bool {
        self.step != Step::ProjectInfo
    }

    pub fn next(&mut self) -> Result<Step, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        if !self.can_proceed() {
            return Err(WizardError::Incomplete(self.step));
        }
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<Step, WizardError> {
        let previous = self.step.previous().ok_or(WizardError::AtFirstStep)?;
        self.step = previous;
        Ok(previous)
    }

    pub fn review(&self) -> Review {
        Review::from_data(&self.data)
    }

    /// Run the submission sequence from the review step.
    ///
    /// On failure the wizard stays on review and keeps the error message for
    /// display; rows already written are left in place.
    pub async fn create<S: Store>(&mut self, store: &S) -> Result<Project, WizardError> {
        if self.step != Step::Review {
            return Err(WizardError::NotAtReview(self.step));
        }

        self.error = None;
        match submit_project(store, &self.data).await {
            Ok(project) => Ok(project),
            Err(error) => {
                self.error = Some(error.display_message());
                Err(error.into())
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
    }

    pub fn set_website_url(&mut self, url: impl Into<String>) {
        self.data.website_url = url.into();
    }

    pub fn set_keyword(&mut self, index: usize, keyword: impl Into<String>) -> Result<(), WizardError> {
        self.keyword_slot(index)?.keyword = keyword.into();
        Ok(())
    }

    pub fn set_keyword_location(
        &mut self,
        index: usize,
        location: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.keyword_slot(index)?.location = location.into();
        Ok(())
    }

    pub fn set_keyword_device(&mut self, index: usize, device: Device) -> Result<(), WizardError> {
        self.keyword_slot(index)?.device = device;
        Ok(())
    }

    pub fn set_competitor_url(&mut self, index: usize, url: impl Into<String>) -> Result<(), WizardError> {
        self.competitor_slot(index)?.url = url.into();
        Ok(())
    }

    pub fn set_competitor_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.competitor_slot(index)?.name = name.into();
        Ok(())
    }

    pub fn set_frequency(&mut self, frequency: MonitoringFrequency) {
        self.data.frequency = frequency;
    }

    /// Clamped to the slider range 1..=10.
    pub fn set_alert_threshold(&mut self, threshold: u8) {
        self.data.alert_threshold =
            threshold.clamp(data::MIN_ALERT_THRESHOLD, data::MAX_ALERT_THRESHOLD);
    }

    pub fn set_alert_on_competitor_changes(&mut self, enabled: bool) {
        self.data.alert_on_competitor_changes = enabled;
    }

    pub fn set_alert_on_new_content_gaps(&mut self, enabled: bool) {
        self.data.alert_on_new_content_gaps = enabled;
    }

    fn keyword_slot(&mut self, index: usize) -> Result<&mut KeywordEntry, WizardError> {
        let slots = self.data.keywords.len();
        self.data
            .keywords
            .get_mut(index)
            .ok_or(WizardError::SlotOutOfRange {
                kind: "keyword",
                index,
                slots,
            })
    }

    fn competitor_slot(&mut self, index: usize) -> Result<&mut CompetitorEntry, WizardError> {
        let slots = self.data.competitors.len();
        self.data
            .competitors
            .get_mut(index)
            .ok_or(WizardError::SlotOutOfRange {
                kind: "competitor",
                index,
                slots,
            })
    }
}
