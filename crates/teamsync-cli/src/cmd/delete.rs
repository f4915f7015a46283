//! `tsy delete` — remove a task locally and remotely.

use clap::Args;

use crate::cmd::open_synced_store;
use crate::output::{render_success, OutputMode};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Task id.
    pub id: String,
}

pub fn run_delete(args: &DeleteArgs, output: OutputMode) -> anyhow::Result<()> {
    let mut store = open_synced_store()?;
    if !store.delete_task(&args.id) {
        anyhow::bail!("task not found: {}", args.id);
    }
    render_success(output, &format!("Deleted task {}", args.id))
}
