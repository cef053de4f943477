use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::{LabId, ModuleId, TrackId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown lab difficulty: {0}")]
pub struct ParseDifficultyError(pub String);

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// How demanding a lab is. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Extreme];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Extreme => "extreme",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseDifficultyError(s.to_owned()))
    }
}

//
// ─── LAB ───────────────────────────────────────────────────────────────────────
//

/// A hands-on exercise.
///
/// Labs are immutable once loaded: the UI renders whatever the catalog or the
/// remote API hands back and never edits them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    pub id: LabId,
    pub track_id: TrackId,
    pub module_id: ModuleId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub estimated_minutes: u32,
    pub points_awarded: u32,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
}

//
// ─── INSTANCE STATUS ───────────────────────────────────────────────────────────
//

/// Lifecycle of a running lab container as reported by the labs API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Starting,
    Running,
    Stopped,
    Error,
    /// Anything the API reports that this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Status record for a lab instance. Snake case on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabInstanceStatus {
    pub status: InstanceStatus,
    pub lab_id: LabId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_ip_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LabInstanceStatus {
    /// Bare status record with no optional fields set.
    #[must_use]
    pub fn new(lab_id: LabId, status: InstanceStatus) -> Self {
        Self {
            status,
            lab_id,
            url: None,
            direct_ip_url: None,
            message: None,
            container_created: None,
            error: None,
        }
    }
}
