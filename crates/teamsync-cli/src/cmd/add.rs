//! `tsy add` — create a task and push it.

use clap::Args;
use serde::Serialize;
use std::io::Write as _;
use teamsync_core::codec::normalize_date;
use teamsync_core::model::task::new_task_id;
use teamsync_core::model::Task;

use crate::cmd::open_synced_store;
use crate::output::{render, OutputMode};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Title of the new task.
    #[arg(short, long)]
    pub title: String,

    /// Description text.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Project name (must not be empty to group the task).
    #[arg(long)]
    pub project: Option<String>,

    /// Assignee name.
    #[arg(long)]
    pub assignee: Option<String>,

    /// Status; defaults to the board's first status.
    #[arg(long)]
    pub status: Option<String>,

    /// Priority; defaults to the board's second priority.
    #[arg(long)]
    pub priority: Option<String>,

    /// Due date; accepts common date formats, defaults to today.
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Debug, Serialize)]
struct Created {
    id: String,
    title: String,
}

pub fn run_add(args: &AddArgs, output: OutputMode) -> anyhow::Result<()> {
    let mut store = open_synced_store()?;
    let model = store.model();

    let status_id = args.status.clone().unwrap_or_else(|| {
        model
            .statuses
            .first()
            .map_or_else(|| "To Do".to_string(), |s| s.id.clone())
    });
    // New tasks land at the board's second priority (Medium on a stock
    // board) rather than the lowest.
    let priority_id = args.priority.clone().unwrap_or_else(|| {
        model
            .priorities
            .get(1)
            .or_else(|| model.priorities.first())
            .map_or_else(|| "Medium".to_string(), |p| p.id.clone())
    });

    let task = Task {
        id: new_task_id(),
        title: args.title.clone(),
        description: args.description.clone().unwrap_or_default(),
        status_id,
        priority_id,
        assignee_id: args.assignee.clone().unwrap_or_default(),
        project_id: args.project.clone().unwrap_or_default(),
        due_date: normalize_date(args.due.as_deref()),
        ..Task::default()
    };

    let created = Created {
        id: task.id.clone(),
        title: task.title.clone(),
    };
    store.upsert_task(task);

    render(output, &created, |c, w| {
        writeln!(w, "Created task {}: {}", c.id, c.title)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_args_require_only_a_title() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: AddArgs,
        }
        let w = Wrapper::parse_from(["test", "--title", "Fix login"]);
        assert_eq!(w.args.title, "Fix login");
        assert!(w.args.status.is_none());
        assert!(w.args.due.is_none());
    }
}
