use serde::{Deserialize, Serialize};

use crate::model::ids::{ModuleId, TrackId};

/// A unit of learning content. `content` is Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: ModuleId,
    pub track_id: TrackId,
    pub title: String,
    pub summary: String,
    pub content: String,
}
