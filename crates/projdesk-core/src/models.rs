//! Domain records mirrored from the backend schema.
//!
//! These are passive data-transfer shapes: validation, uniqueness and
//! referential integrity are enforced by the hosted backend service, never
//! here. Field names and enum labels match the wire format of the service's
//! generated API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of trackable work unit within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    /// Plain task.
    #[default]
    General,
    /// Open issue waiting on clarification.
    Pending,
    /// Recorded decision.
    Decision,
    /// Change request against the project scope.
    ChangeRequest,
}

/// Workflow status of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    #[default]
    NotStarted,
    InProgress,
    Blocked,
    AwaitingResponse,
    Completed,
}

/// A project as stored in the `projects` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: String,
    /// Owning project manager.
    pub manager: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stored raw content associated with a project, e.g. the extracted text of
/// an uploaded document. Optionally the source of one or more items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub project_id: String,
    /// Declared MIME type of the uploaded file.
    pub content_type: String,
    /// Raw extracted text.
    pub content: String,
    /// Free-form metadata (original file name, page count, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A trackable work unit (task, pending issue, decision or change request)
/// belonging to a project. Row shape of the `items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub project_id: String,
    pub item_type: ItemType,
    pub status: ItemStatus,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Parent item for sub-tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Grouping bucket within the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_package_id: Option<String>,
}

/// Row of the `item_artifacts` join table linking an item to the artifact it
/// was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemArtifactLink {
    pub id: String,
    pub item_id: String,
    pub artifact_id: String,
}

/// A system-proposed, not-yet-persisted candidate item.
///
/// Carries the proposed item plus a confidence score in `[0, 1]`. Persisting
/// a suggestion means inserting its `item` through the backend client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub item: Item,
    pub confidence: f32,
}
