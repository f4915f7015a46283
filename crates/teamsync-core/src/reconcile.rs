//! Snapshot reconciler: rebuild a fully consistent entity model from one
//! remote snapshot.
//!
//! The reconciler is a pure function from (snapshot, previous model) to a
//! replacement model. The caller swaps the result in wholesale, so no
//! partial intermediate state is ever observable. A pull failure never
//! reaches this code — the previous model stays untouched upstream.

use tracing::{debug, info};

use crate::bridge::Snapshot;
use crate::codec::{
    decode_member, decode_priority, decode_project, decode_status, decode_task, TaskDefaults,
};
use crate::model::{EntityModel, Project, User};

/// Rebuild the entity model from a snapshot.
///
/// Directory retention: an empty status or priority row-set keeps the
/// previous in-memory list — a configuration sheet that has not been
/// authored yet must not erase working defaults. Projects and members are
/// replaced wholesale; auto-discovery refills anything task rows still
/// reference.
///
/// Auto-discovery: every task foreign key that names a missing project or
/// member synthesizes a placeholder entity, so after reconciliation every
/// non-empty `project_id`/`assignee_id` resolves.
#[must_use]
pub fn reconcile(snapshot: &Snapshot, previous: &EntityModel) -> EntityModel {
    let statuses = if snapshot.status.is_empty() {
        previous.statuses.clone()
    } else {
        snapshot
            .status
            .iter()
            .map(|row| decode_status(row).entity)
            .collect()
    };

    let priorities = if snapshot.priority.is_empty() {
        previous.priorities.clone()
    } else {
        snapshot
            .priority
            .iter()
            .map(|row| decode_priority(row).entity)
            .collect()
    };

    let mut projects: Vec<Project> = snapshot
        .projects
        .iter()
        .map(|row| decode_project(row).entity)
        .collect();

    let mut users: Vec<User> = snapshot
        .members
        .iter()
        .map(|row| decode_member(row).entity)
        .collect();

    let defaults = TaskDefaults::from_directories(&statuses, &priorities);
    let tasks: Vec<_> = snapshot
        .tasks
        .iter()
        .map(|row| decode_task(row, defaults).entity)
        .collect();

    // Auto-discovery pass: materialize entities that exist only as
    // foreign-key strings in task rows, in first-reference order.
    for task in &tasks {
        if !task.project_id.is_empty() && !projects.iter().any(|p| p.id == task.project_id) {
            debug!(project = %task.project_id, "auto-discovered project from task row");
            projects.push(Project::placeholder(&task.project_id));
        }
        if !task.assignee_id.is_empty() && !users.iter().any(|u| u.id == task.assignee_id) {
            debug!(member = %task.assignee_id, "auto-discovered member from task row");
            users.push(User::placeholder(&task.assignee_id));
        }
    }

    info!(
        tasks = tasks.len(),
        projects = projects.len(),
        members = users.len(),
        "reconciled snapshot"
    );

    EntityModel {
        tasks,
        users,
        projects,
        statuses,
        priorities,
    }
}
