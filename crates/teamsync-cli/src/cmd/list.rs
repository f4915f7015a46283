//! `tsy list` — list tasks with the board's filter set.

use clap::Args;
use std::io::Write as _;
use teamsync_core::model::Task;

use crate::cmd::open_synced_store;
use crate::output::{render, OutputMode};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only tasks in this project.
    #[arg(long)]
    pub project: Option<String>,

    /// Only tasks assigned to this member.
    #[arg(long)]
    pub assignee: Option<String>,

    /// Only tasks in this status.
    #[arg(long)]
    pub status: Option<String>,

    /// Only tasks at this priority.
    #[arg(long)]
    pub priority: Option<String>,

    /// Case-insensitive title substring match.
    #[arg(long)]
    pub search: Option<String>,
}

impl ListArgs {
    fn matches(&self, task: &Task) -> bool {
        let by = |filter: &Option<String>, value: &str| {
            filter.as_deref().is_none_or(|wanted| wanted == value)
        };
        by(&self.project, &task.project_id)
            && by(&self.assignee, &task.assignee_id)
            && by(&self.status, &task.status_id)
            && by(&self.priority, &task.priority_id)
            && self.search.as_deref().is_none_or(|needle| {
                task.title.to_lowercase().contains(&needle.to_lowercase())
            })
    }
}

pub fn run_list(args: &ListArgs, output: OutputMode) -> anyhow::Result<()> {
    let store = open_synced_store()?;
    let tasks: Vec<Task> = store
        .model()
        .tasks
        .iter()
        .filter(|t| args.matches(t))
        .cloned()
        .collect();

    render(output, &tasks, |tasks, w| {
        if tasks.is_empty() {
            return writeln!(w, "No tasks match.");
        }
        for task in tasks {
            let assignee = if task.assignee_id.is_empty() {
                "Unassigned"
            } else {
                &task.assignee_id
            };
            writeln!(
                w,
                "{:<18} {:<14} {:<10} {:<10} {}",
                task.id, task.status_id, task.priority_id, task.due_date, task.title
            )?;
            writeln!(w, "{:<18} {} / {}", "", assignee, project_label(task))?;
        }
        Ok(())
    })
}

fn project_label(task: &Task) -> &str {
    if task.project_id.is_empty() {
        "No Project"
    } else {
        &task.project_id
    }
}

#[cfg(test)]
mod tests {
    use super::ListArgs;
    use teamsync_core::model::Task;

    fn args() -> ListArgs {
        ListArgs {
            project: None,
            assignee: None,
            status: None,
            priority: None,
            search: None,
        }
    }

    fn task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Fix login timeout".to_string(),
            status_id: "In Progress".to_string(),
            priority_id: "High".to_string(),
            project_id: "Launch".to_string(),
            assignee_id: String::new(),
            ..Task::default()
        }
    }

    #[test]
    fn no_filters_match_everything() {
        assert!(args().matches(&task()));
    }

    #[test]
    fn filters_are_conjunctive() {
        let mut filtered = args();
        filtered.status = Some("In Progress".to_string());
        filtered.project = Some("Launch".to_string());
        assert!(filtered.matches(&task()));

        filtered.priority = Some("Low".to_string());
        assert!(!filtered.matches(&task()));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut filtered = args();
        filtered.search = Some("LOGIN".to_string());
        assert!(filtered.matches(&task()));

        filtered.search = Some("checkout".to_string());
        assert!(!filtered.matches(&task()));
    }

    #[test]
    fn empty_assignee_filter_value_matches_unassigned() {
        let mut filtered = args();
        filtered.assignee = Some(String::new());
        assert!(filtered.matches(&task()));
    }
}
