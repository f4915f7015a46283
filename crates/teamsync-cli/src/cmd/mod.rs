//! Command handlers, one module per `tsy` subcommand.

pub mod add;
pub mod comment;
pub mod connect;
pub mod delete;
pub mod list;
pub mod member;
pub mod project;
pub mod pull;
pub mod show;
pub mod update;

use anyhow::{Context, Result};
use teamsync_core::bridge::HttpBridge;
use teamsync_core::config;
use teamsync_core::store::Store;

/// Open a store against the configured bridge endpoint and pull the
/// current snapshot.
///
/// The entity model is ephemeral by design — nothing but the bridge URL
/// persists between invocations — so every command that reads or mutates
/// tasks starts with a fresh pull.
pub fn open_synced_store() -> Result<Store<HttpBridge>> {
    let cfg = config::load_user_config()?;
    let url = cfg
        .bridge_url
        .context("no bridge configured; run `tsy connect <url>` first")?;
    let mut store = Store::new(HttpBridge::new(url));
    store
        .refresh()
        .context("could not sync; check your bridge URL")?;
    Ok(store)
}
