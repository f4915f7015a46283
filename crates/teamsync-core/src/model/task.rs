use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A titled URL attached to a task. Stored in the sheet as one
/// `Title|URL` line per link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLink {
    pub title: String,
    pub url: String,
}

impl ReferenceLink {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One tracked task. Foreign keys are the referenced entity's id string;
/// empty `assignee_id`/`project_id` mean unassigned/no project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status_id: String,
    pub priority_id: String,
    pub assignee_id: String,
    pub project_id: String,
    /// Calendar date, always normalized to `YYYY-MM-DD`.
    pub due_date: String,
    pub reference_links: Vec<ReferenceLink>,
    /// Append-only free-text log; entries are immutable once appended.
    pub activity_log: Vec<String>,
    pub subtasks: Vec<String>,
    /// RFC 3339 instant of the last local edit.
    pub updated_at: String,
}

impl Task {
    /// Stamp the task with the current instant. Called on every local edit
    /// so a pull can tell which side is newer in logs.
    pub fn touch(&mut self) {
        self.updated_at = now_stamp();
    }
}

/// Current instant in the millisecond-precision RFC 3339 form the sheet
/// rows carry.
#[must_use]
pub fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generate a client-side task id. Ids are never server-assigned, which
/// keeps create operations idempotent at the remote side.
#[must_use]
pub fn new_task_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("t{millis}-{suffix:04}")
}
