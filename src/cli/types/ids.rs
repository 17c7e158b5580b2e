//! ID types for rows stored by the database service.

use crate::error::{AutopilotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe wrapper for project IDs.
///
/// Project ids are generated by the database service on insert, so the
/// client only ever parses or echoes them back.
///
/// # Examples
///
/// ```rust
/// use seo_autopilot::ProjectId;
///
/// let id: ProjectId = "6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11".parse().unwrap();
/// assert_eq!(id.to_string(), "6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = AutopilotError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| AutopilotError::InvalidId { id: s.to_string() })
    }
}

/// Type-safe wrapper for auth user IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_parse_and_display() {
        let raw = "6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11";
        let id: ProjectId = raw.parse().unwrap();
        assert_eq!(id.to_string(), raw);
        assert_eq!(id.as_uuid(), Uuid::parse_str(raw).unwrap());
    }

    #[test]
    fn test_project_id_parse_trims_whitespace() {
        let id: ProjectId = " 6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11\n".parse().unwrap();
        assert_eq!(id.to_string(), "6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11");
    }

    #[test]
    fn test_project_id_parse_invalid() {
        let result = "not-a-uuid".parse::<ProjectId>();
        match result {
            Err(AutopilotError::InvalidId { id }) => assert_eq!(id, "not-a-uuid"),
            other => panic!("Expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let uuid = Uuid::parse_str("6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11").unwrap();
        let json = serde_json::to_string(&UserId::new(uuid)).unwrap();
        assert_eq!(json, "\"6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11\"");

        let back: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_uuid(), uuid);
    }
}
