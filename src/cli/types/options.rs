//! Option enums shared by the CLI, the wizard and the stored rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often the monitoring automations run for a project.
///
/// Stored as the snake_case strings `weekly`, `twice_weekly` and `daily`.
///
/// # Examples
///
/// ```rust
/// use seo_autopilot::MonitoringFrequency;
///
/// assert_eq!(MonitoringFrequency::default(), MonitoringFrequency::Weekly);
/// assert_eq!(MonitoringFrequency::TwiceWeekly.as_str(), "twice_weekly");
/// assert_eq!(MonitoringFrequency::TwiceWeekly.label(), "twice weekly");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringFrequency {
    /// Every Monday (recommended)
    #[default]
    Weekly,
    /// Monday and Thursday
    TwiceWeekly,
    /// Every day, uses more API credits
    Daily,
}

impl MonitoringFrequency {
    /// Stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitoringFrequency::Weekly => "weekly",
            MonitoringFrequency::TwiceWeekly => "twice_weekly",
            MonitoringFrequency::Daily => "daily",
        }
    }

    /// Review label: the stored value with its underscore shown as a space.
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl fmt::Display for MonitoringFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Device class a keyword's rankings are tracked on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Mobile,
    Tablet,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Device::Desktop => "desktop",
            Device::Mobile => "mobile",
            Device::Tablet => "tablet",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&MonitoringFrequency::TwiceWeekly).unwrap(),
            "\"twice_weekly\""
        );
        assert_eq!(
            serde_json::from_str::<MonitoringFrequency>("\"daily\"").unwrap(),
            MonitoringFrequency::Daily
        );
    }

    #[test]
    fn test_frequency_display_matches_stored_value() {
        for freq in [
            MonitoringFrequency::Weekly,
            MonitoringFrequency::TwiceWeekly,
            MonitoringFrequency::Daily,
        ] {
            assert_eq!(freq.to_string(), freq.as_str());
        }
    }

    #[test]
    fn test_frequency_label() {
        assert_eq!(MonitoringFrequency::Weekly.label(), "weekly");
        assert_eq!(MonitoringFrequency::TwiceWeekly.label(), "twice weekly");
    }

    #[test]
    fn test_device_round_trip_lowercase() {
        assert_eq!(serde_json::to_string(&Device::Mobile).unwrap(), "\"mobile\"");
        assert_eq!(
            serde_json::from_str::<Device>("\"tablet\"").unwrap(),
            Device::Tablet
        );
        assert_eq!(Device::default(), Device::Desktop);
    }

    #[test]
    fn test_cli_value_names() {
        use clap::ValueEnum;

        let freq = MonitoringFrequency::from_str("twice-weekly", true).unwrap();
        assert_eq!(freq, MonitoringFrequency::TwiceWeekly);

        let device = Device::from_str("MOBILE", true).unwrap();
        assert_eq!(device, Device::Mobile);
    }
}
