//! The store: single owner of the entity model and the bridge handle.
//!
//! Consumers read snapshots of the model and dispatch intents through the
//! operations here; nothing else writes entity state. Local mutations are
//! optimistic and synchronous, each followed by one fire-and-forget push.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::bridge::{Bridge, Collection};
use crate::codec::{encode_member, encode_project, encode_task};
use crate::dispatch;
use crate::error::BridgeError;
use crate::model::directory::generated_avatar_url;
use crate::model::{EntityModel, Project, Task, User};
use crate::reconcile::reconcile;

/// Entity store plus sync-status markers.
pub struct Store<B: Bridge> {
    model: EntityModel,
    bridge: B,
    last_synced: Option<DateTime<Utc>>,
    sync_failed: bool,
}

impl<B: Bridge> Store<B> {
    /// New store seeded with the built-in directory defaults.
    pub fn new(bridge: B) -> Self {
        Self {
            model: EntityModel::seeded(),
            bridge,
            last_synced: None,
            sync_failed: false,
        }
    }

    /// Read snapshot of the current model.
    #[must_use]
    pub fn model(&self) -> &EntityModel {
        &self.model
    }

    /// When the bridge last accepted a pull or push, if ever.
    #[must_use]
    pub const fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.last_synced
    }

    /// Whether the most recent bridge interaction failed.
    #[must_use]
    pub const fn sync_failed(&self) -> bool {
        self.sync_failed
    }

    /// Pull the remote snapshot and replace the model wholesale.
    ///
    /// On any transport or parse failure the previous model is left
    /// untouched and the single error is returned for user display. A
    /// push in flight elsewhere may be overwritten by this replacement;
    /// that race is accepted by design.
    pub fn refresh(&mut self) -> Result<(), BridgeError> {
        match self.bridge.pull() {
            Ok(snapshot) => {
                self.model = reconcile(&snapshot, &self.model);
                self.mark_synced(true);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "pull failed; keeping previous model");
                self.mark_synced(false);
                Err(err)
            }
        }
    }

    /// Insert or replace a task locally (matched by id, order preserved;
    /// new tasks append), then push it.
    pub fn upsert_task(&mut self, mut task: Task) {
        task.touch();
        let row = encode_task(&task);
        match self.model.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.model.tasks.push(task),
        }
        let ok = dispatch::upsert(&self.bridge, Collection::Tasks, row);
        self.mark_synced(ok);
    }

    /// Remove a task locally and push the delete. Returns whether the
    /// task existed.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.model.tasks.len();
        self.model.tasks.retain(|t| t.id != id);
        if self.model.tasks.len() == before {
            return false;
        }
        let ok = dispatch::delete(&self.bridge, Collection::Tasks, id);
        self.mark_synced(ok);
        true
    }

    /// Append a dated activity-log entry to a task and push it. Returns
    /// whether the task existed.
    pub fn log_activity(&mut self, task_id: &str, entry: &str) -> bool {
        let Some(task) = self.model.tasks.iter().find(|t| t.id == task_id) else {
            return false;
        };
        let mut updated = task.clone();
        let dated = format!("{} - {entry}", Utc::now().format("%Y-%m-%d"));
        updated.activity_log.push(dated);
        self.upsert_task(updated);
        true
    }

    /// Create a project (name doubles as id) and push it to the Projects
    /// collection. Duplicate names are rejected locally.
    pub fn add_project(&mut self, name: &str, color_hex: &str, description: Option<&str>) -> bool {
        if name.trim().is_empty() || self.model.project(name).is_some() {
            return false;
        }
        let project = Project {
            id: name.to_string(),
            name: name.to_string(),
            color: format!("bg-[{color_hex}]"),
            description: description.map(ToString::to_string),
        };
        let row = encode_project(&project);
        self.model.projects.push(project);
        info!(project = name, "created project");
        let ok = dispatch::upsert(&self.bridge, Collection::Projects, row);
        self.mark_synced(ok);
        true
    }

    /// Create a team member (name doubles as id, avatar generated) and
    /// push it to the Team Members collection.
    pub fn add_member(&mut self, name: &str, email: &str) -> bool {
        if name.trim().is_empty() || self.model.user(name).is_some() {
            return false;
        }
        let user = User {
            id: name.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: generated_avatar_url(name),
        };
        let row = encode_member(&user);
        self.model.users.push(user);
        info!(member = name, "created team member");
        let ok = dispatch::upsert(&self.bridge, Collection::TeamMembers, row);
        self.mark_synced(ok);
        true
    }

    fn mark_synced(&mut self, ok: bool) {
        if ok {
            self.last_synced = Some(Utc::now());
            self.sync_failed = false;
        } else {
            self.sync_failed = true;
        }
    }
}
