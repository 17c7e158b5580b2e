//! Summary shown on the review step before the project is created

use serde::Serialize;
use std::fmt;

use super::WizardData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub label: String,
    pub value: String,
}

/// Read-only view of everything the wizard is about to write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub name: String,
    pub website: String,
    pub frequency: String,
    pub alert_at: String,
    pub keywords: Vec<ReviewRow>,
    pub competitors: Vec<ReviewRow>,
}

impl Review {
    /// Entries with any text are listed, numbered in display order.
    pub fn from_data(data: &WizardData) -> Self {
        let keywords = data
            .keywords
            .iter()
            .filter(|k| !k.keyword.is_empty())
            .enumerate()
            .map(|(i, k)| ReviewRow {
                label: format!("#{}", i + 1),
                value: format!("{} · {} · {}", k.keyword, k.location, k.device),
            })
            .collect();

        let competitors = data
            .competitors
            .iter()
            .filter(|c| !c.url.is_empty())
            .enumerate()
            .map(|(i, c)| ReviewRow {
                label: if c.name.is_empty() {
                    format!("#{}", i + 1)
                } else {
                    c.name.clone()
                },
                value: c.url.clone(),
            })
            .collect();

        Self {
            name: data.name.clone(),
            website: data.website_url.clone(),
            frequency: data.frequency.label(),
            alert_at: format!("{}+ position drop", data.alert_threshold),
            keywords,
            competitors,
        }
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project")?;
        writeln!(f, "  {:<10} {}", "Name", self.name)?;
        writeln!(f, "  {:<10} {}", "Website", self.website)?;
        writeln!(f, "  {:<10} {}", "Frequency", self.frequency)?;
        writeln!(f, "  {:<10} {}", "Alert at", self.alert_at)?;

        writeln!(f, "Keywords ({})", self.keywords.len())?;
        for row in &self.keywords {
            writeln!(f, "  {:<10} {}", row.label, row.value)?;
        }

        writeln!(f, "Competitors ({})", self.competitors.len())?;
        for row in &self.competitors {
            writeln!(f, "  {:<10} {}", row.label, row.value)?;
        }
        Ok(())
    }
}
