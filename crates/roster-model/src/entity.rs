//! Typed sheet records.
//!
//! Field names serialize to the sheet column headers (`ClientID`,
//! `PriorityLevel`, ...) so an exported record lines up with the upload it
//! came from. List-valued columns stay as their raw text; parsing them is
//! the validator's job.

use serde::{Deserialize, Serialize};

/// A client requesting work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "ClientID")]
    pub client_id: String,
    #[serde(rename = "ClientName")]
    pub client_name: String,
    /// Expected range 1-5.
    #[serde(rename = "PriorityLevel")]
    pub priority_level: i64,
    /// Comma-separated task references.
    #[serde(rename = "RequestedTaskIDs")]
    pub requested_task_ids: String,
    #[serde(rename = "GroupTag")]
    pub group_tag: String,
    /// Free-form JSON text.
    #[serde(rename = "AttributesJSON")]
    pub attributes_json: String,
}

/// A worker who can be assigned to tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    #[serde(rename = "WorkerID")]
    pub worker_id: String,
    #[serde(rename = "WorkerName")]
    pub worker_name: String,
    /// Comma-separated skill tags.
    #[serde(rename = "Skills")]
    pub skills: String,
    /// JSON array of phase numbers, e.g. `[1,2,3]`.
    #[serde(rename = "AvailableSlots")]
    pub available_slots: String,
    #[serde(rename = "MaxLoadPerPhase")]
    pub max_load_per_phase: i64,
    #[serde(rename = "WorkerGroup")]
    pub worker_group: String,
    #[serde(rename = "QualificationLevel")]
    pub qualification_level: i64,
}

/// A unit of work requested by clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "TaskID")]
    pub task_id: String,
    #[serde(rename = "TaskName")]
    pub task_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    /// Number of phases.
    #[serde(rename = "Duration")]
    pub duration: i64,
    /// Comma-separated skill tags.
    #[serde(rename = "RequiredSkills")]
    pub required_skills: String,
    /// JSON array (`[1,2]`) or inclusive range (`1-3`).
    #[serde(rename = "PreferredPhases")]
    pub preferred_phases: String,
    #[serde(rename = "MaxConcurrent")]
    pub max_concurrent: i64,
}
