//! teamsync-core: the synchronization engine behind the teamsync tracker.
//!
//! The remote side is a spreadsheet reached through a single JSON bridge
//! endpoint. This crate owns everything between that endpoint and the UI:
//! the normalized entity model, the row codec, the snapshot reconciler,
//! the upsert/delete dispatcher, and the persisted bridge configuration.

pub mod bridge;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod row;
pub mod store;

pub use error::BridgeError;
