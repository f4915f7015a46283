//! `tsy update` — field edits on an existing task.

use clap::Args;
use teamsync_core::codec::normalize_date;

use crate::cmd::open_synced_store;
use crate::output::{render_success, OutputMode};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Task id.
    pub id: String,

    /// New title.
    #[arg(long)]
    pub title: Option<String>,

    /// New description (empty string clears it).
    #[arg(long)]
    pub description: Option<String>,

    /// New status.
    #[arg(long)]
    pub status: Option<String>,

    /// New priority.
    #[arg(long)]
    pub priority: Option<String>,

    /// New assignee (empty string unassigns).
    #[arg(long)]
    pub assignee: Option<String>,

    /// New project (empty string detaches).
    #[arg(long)]
    pub project: Option<String>,

    /// New due date.
    #[arg(long)]
    pub due: Option<String>,

    /// Append a subtask title.
    #[arg(long)]
    pub subtask: Vec<String>,

    /// Append a reference link as `Title|URL` (or a bare URL).
    #[arg(long)]
    pub link: Vec<String>,
}

impl UpdateArgs {
    fn has_edits(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.assignee.is_some()
            || self.project.is_some()
            || self.due.is_some()
            || !self.subtask.is_empty()
            || !self.link.is_empty()
    }
}

pub fn run_update(args: &UpdateArgs, output: OutputMode) -> anyhow::Result<()> {
    if !args.has_edits() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }

    let mut store = open_synced_store()?;
    let Some(mut task) = store.model().task(&args.id).cloned() else {
        anyhow::bail!("task not found: {}", args.id);
    };

    if let Some(title) = &args.title {
        task.title.clone_from(title);
    }
    if let Some(description) = &args.description {
        task.description.clone_from(description);
    }
    if let Some(status) = &args.status {
        task.status_id.clone_from(status);
    }
    if let Some(priority) = &args.priority {
        task.priority_id.clone_from(priority);
    }
    if let Some(assignee) = &args.assignee {
        task.assignee_id.clone_from(assignee);
    }
    if let Some(project) = &args.project {
        task.project_id.clone_from(project);
    }
    if let Some(due) = &args.due {
        task.due_date = normalize_date(Some(due.as_str()));
    }
    task.subtasks.extend(args.subtask.iter().cloned());
    for raw in &args.link {
        let link = match raw.split_once('|') {
            Some((title, url)) => teamsync_core::model::ReferenceLink::new(title, url),
            None => teamsync_core::model::ReferenceLink::new("Link", raw.as_str()),
        };
        task.reference_links.push(link);
    }

    store.upsert_task(task);
    render_success(output, &format!("Updated task {}", args.id))
}
