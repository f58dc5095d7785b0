use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Persisted lifecycle status of a project.
///
/// Note that "queued" is not a status: a queued project is persisted as
/// `parked` with the `is_queued` flag set. The four-lane view is derived
/// in [`crate::board::lane`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Parked,
    Active,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parked => "parked",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parked" => Ok(Self::Parked),
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("Invalid project status: {}", s)),
        }
    }
}

// Stored documents can carry statuses written by older or foreign writers.
// Unrecognized values decode as `parked` so the board can always render.
impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(ProjectStatus::Parked))
    }
}

/// One of the four visual buckets a project can appear in.
///
/// Lanes are derived from `(status, is_queued)` and never persisted
/// directly; the state machine reasons exclusively in lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Parked,
    Queued,
    Active,
    Archived,
}

impl Lane {
    pub const ALL: [Lane; 4] = [Lane::Parked, Lane::Queued, Lane::Active, Lane::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parked => "parked",
            Self::Queued => "queued",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parked" => Ok(Self::Parked),
            "queued" => Ok(Self::Queued),
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(format!(
                "Invalid lane '{}'. Valid lanes: parked, queued, active, archived",
                s
            )),
        }
    }
}

/// A tracked project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub is_queued: bool,
    /// Free-form descriptive fields, irrelevant to the state machine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategic_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project. Projects start parked and unqueued.
    pub fn new(name: &str, description: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            status: ProjectStatus::Parked,
            is_queued: false,
            strategic_goal: None,
            color: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_goal(mut self, goal: &str) -> Self {
        self.strategic_goal = Some(goal.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================
    // ProjectStatus tests
    // =========================================

    #[test]
    fn test_status_roundtrip() {
        for s in &["parked", "active", "archived"] {
            let parsed: ProjectStatus = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("invalid".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Parked).unwrap(),
            "\"parked\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Archived).unwrap(),
            "\"archived\""
        );
    }

    #[test]
    fn test_status_unknown_value_decodes_as_parked() {
        assert_eq!(
            serde_json::from_str::<ProjectStatus>("\"on_hold\"").unwrap(),
            ProjectStatus::Parked
        );
        assert_eq!(
            serde_json::from_str::<ProjectStatus>("\"\"").unwrap(),
            ProjectStatus::Parked
        );
    }

    #[test]
    fn test_status_known_values_decode_exactly() {
        assert_eq!(
            serde_json::from_str::<ProjectStatus>("\"active\"").unwrap(),
            ProjectStatus::Active
        );
        assert_eq!(
            serde_json::from_str::<ProjectStatus>("\"archived\"").unwrap(),
            ProjectStatus::Archived
        );
    }

    // =========================================
    // Lane tests
    // =========================================

    #[test]
    fn test_lane_roundtrip() {
        for s in &["parked", "queued", "active", "archived"] {
            let parsed: Lane = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("done".parse::<Lane>().is_err());
    }

    #[test]
    fn test_lane_all_covers_every_variant() {
        assert_eq!(Lane::ALL.len(), 4);
        for lane in Lane::ALL {
            assert_eq!(lane.as_str().parse::<Lane>().unwrap(), lane);
        }
    }

    // =========================================
    // Project tests
    // =========================================

    #[test]
    fn test_new_project_starts_parked_unqueued() {
        let p = Project::new("website", "marketing refresh");
        assert_eq!(p.status, ProjectStatus::Parked);
        assert!(!p.is_queued);
        assert_eq!(p.created_at, p.updated_at);
    }

    #[test]
    fn test_project_builders() {
        let p = Project::new("app", "").with_goal("launch Q3").with_color("#ff8800");
        assert_eq!(p.strategic_goal.as_deref(), Some("launch Q3"));
        assert_eq!(p.color.as_deref(), Some("#ff8800"));
    }

    #[test]
    fn test_project_json_roundtrip() {
        let p = Project::new("website", "marketing refresh");
        let json = serde_json::to_string(&p).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, p.id);
        assert_eq!(parsed.name, p.name);
        assert_eq!(parsed.status, p.status);
        assert_eq!(parsed.updated_at, p.updated_at);
    }

    #[test]
    fn test_project_decodes_with_missing_optional_fields() {
        let json = format!(
            r#"{{
                "id": "{}",
                "name": "legacy",
                "status": "someday",
                "created_at": "2026-01-05T10:00:00Z",
                "updated_at": "2026-01-05T10:00:00Z"
            }}"#,
            Uuid::new_v4()
        );
        let p: Project = serde_json::from_str(&json).unwrap();
        // Unknown status falls back to parked; flags and extras default.
        assert_eq!(p.status, ProjectStatus::Parked);
        assert!(!p.is_queued);
        assert!(p.description.is_empty());
        assert!(p.strategic_goal.is_none());
    }
}
