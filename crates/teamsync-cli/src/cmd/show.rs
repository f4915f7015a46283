//! `tsy show` — full detail for one task.

use clap::Args;
use std::io::Write as _;

use crate::cmd::open_synced_store;
use crate::output::{human_kv, render, OutputMode};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Task id.
    pub id: String,
}

pub fn run_show(args: &ShowArgs, output: OutputMode) -> anyhow::Result<()> {
    let store = open_synced_store()?;
    let Some(task) = store.model().task(&args.id).cloned() else {
        anyhow::bail!("task not found: {}", args.id);
    };

    render(output, &task, |task, w| {
        human_kv(w, "ID", &task.id)?;
        human_kv(w, "Title", &task.title)?;
        human_kv(w, "Status", &task.status_id)?;
        human_kv(w, "Priority", &task.priority_id)?;
        human_kv(
            w,
            "Assignee",
            if task.assignee_id.is_empty() {
                "Unassigned"
            } else {
                &task.assignee_id
            },
        )?;
        human_kv(
            w,
            "Project",
            if task.project_id.is_empty() {
                "No Project"
            } else {
                &task.project_id
            },
        )?;
        human_kv(w, "Due", &task.due_date)?;
        if !task.description.is_empty() {
            human_kv(w, "Description", &task.description)?;
        }
        if !task.subtasks.is_empty() {
            writeln!(w, "Subtasks:")?;
            for subtask in &task.subtasks {
                writeln!(w, "  - {subtask}")?;
            }
        }
        if !task.reference_links.is_empty() {
            writeln!(w, "Links:")?;
            for link in &task.reference_links {
                writeln!(w, "  - {} <{}>", link.title, link.url)?;
            }
        }
        if !task.activity_log.is_empty() {
            writeln!(w, "Activity:")?;
            for entry in &task.activity_log {
                writeln!(w, "  {entry}")?;
            }
        }
        Ok(())
    })
}
