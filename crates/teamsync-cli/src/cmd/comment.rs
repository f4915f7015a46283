//! `tsy comment` — append an activity-log entry.

use clap::Args;

use crate::cmd::open_synced_store;
use crate::output::{render_success, OutputMode};

#[derive(Args, Debug)]
pub struct CommentArgs {
    /// Task id.
    pub id: String,

    /// Comment text; recorded with today's date.
    pub text: String,
}

pub fn run_comment(args: &CommentArgs, output: OutputMode) -> anyhow::Result<()> {
    let mut store = open_synced_store()?;
    if !store.log_activity(&args.id, &args.text) {
        anyhow::bail!("task not found: {}", args.id);
    }
    render_success(output, &format!("Logged activity on {}", args.id))
}
