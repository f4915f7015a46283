//! `tsy connect` — persist the bridge endpoint URL.

use anyhow::Context;
use clap::Args;
use teamsync_core::config;

use crate::output::{render_success, OutputMode};

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Bridge endpoint URL (the deployed sheet script's exec URL).
    pub url: String,
}

pub fn run_connect(args: &ConnectArgs, output: OutputMode) -> anyhow::Result<()> {
    let mut cfg = config::load_user_config()?;
    cfg.set_bridge_url(&args.url)?;
    config::save_user_config(&cfg).context("failed to persist bridge URL")?;
    render_success(output, &format!("Connected to {}", args.url.trim()))
}
