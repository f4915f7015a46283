//! `tsy pull` — manual refresh from the bridge.

use clap::Args;
use serde::Serialize;
use std::io::Write as _;

use crate::cmd::open_synced_store;
use crate::output::{render, OutputMode};

#[derive(Args, Debug)]
pub struct PullArgs {}

#[derive(Debug, Serialize)]
struct PullReport {
    tasks: usize,
    projects: usize,
    members: usize,
    statuses: usize,
    priorities: usize,
}

pub fn run_pull(_args: &PullArgs, output: OutputMode) -> anyhow::Result<()> {
    let store = open_synced_store()?;
    let model = store.model();
    let report = PullReport {
        tasks: model.tasks.len(),
        projects: model.projects.len(),
        members: model.users.len(),
        statuses: model.statuses.len(),
        priorities: model.priorities.len(),
    };

    render(output, &report, |r, w| {
        writeln!(
            w,
            "Synced: {} tasks, {} projects, {} members ({} statuses, {} priorities)",
            r.tasks, r.projects, r.members, r.statuses, r.priorities
        )
    })
}
