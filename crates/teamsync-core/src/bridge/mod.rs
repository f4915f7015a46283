//! The bridge boundary: wire types and the transport seam.
//!
//! A single HTTP endpoint fronts the remote sheet. Pull is a parameterless
//! GET returning one row-set per collection; push is a POST carrying one
//! upsert/delete operation. The engine assumes the bridge's schema
//! evolution contract: unknown columns in a pushed row are appended to the
//! collection, upsert matches the first row whose identifying column
//! equals the payload's value (appending when absent), and delete removes
//! the first match.

pub mod http;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::row::Row;

pub use http::HttpBridge;

/// Full remote snapshot as the pull endpoint returns it. Absent keys are
/// empty collections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Row>,
    #[serde(default)]
    pub members: Vec<Row>,
    #[serde(default)]
    pub projects: Vec<Row>,
    #[serde(default)]
    pub status: Vec<Row>,
    #[serde(default)]
    pub priority: Vec<Row>,
}

/// The three writable remote collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Tasks,
    Projects,
    TeamMembers,
}

impl Collection {
    /// Sheet tab name as the bridge expects it.
    #[must_use]
    pub const fn sheet_name(self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Projects => "Projects",
            Self::TeamMembers => "Team Members",
        }
    }

    /// Column whose value establishes row identity for upsert/delete.
    #[must_use]
    pub const fn id_column(self) -> &'static str {
        match self {
            Self::Tasks => "ID",
            Self::Projects | Self::TeamMembers => "Name",
        }
    }
}

/// Operation kind carried by a push request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Upsert,
    Delete,
}

/// One push operation. Upsert is the only create-or-update; identity is
/// established purely by matching `id_column` against existing rows, so
/// re-sending an unchanged entity is a remote no-op.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushRequest {
    pub target_sheet: &'static str,
    pub action: Action,
    pub id_column: &'static str,
    pub data: Row,
}

impl PushRequest {
    #[must_use]
    pub fn upsert(collection: Collection, data: Row) -> Self {
        Self {
            target_sheet: collection.sheet_name(),
            action: Action::Upsert,
            id_column: collection.id_column(),
            data,
        }
    }

    /// Delete payload carries only the identifying value.
    #[must_use]
    pub fn delete(collection: Collection, id: &str) -> Self {
        let mut data = Row::new();
        data.set(collection.id_column(), id);
        Self {
            target_sheet: collection.sheet_name(),
            action: Action::Delete,
            id_column: collection.id_column(),
            data,
        }
    }
}

/// Transport seam. The engine only ever needs these two calls; tests
/// substitute an in-memory double that also models the remote schema
/// evolution contract.
pub trait Bridge {
    /// Fetch the full remote snapshot.
    fn pull(&self) -> Result<Snapshot, BridgeError>;

    /// Send one upsert/delete operation. No response body is parsed;
    /// success means the transport accepted the request.
    fn push(&self, request: &PushRequest) -> Result<(), BridgeError>;
}

impl<B: Bridge + ?Sized> Bridge for &B {
    fn pull(&self) -> Result<Snapshot, BridgeError> {
        (**self).pull()
    }

    fn push(&self, request: &PushRequest) -> Result<(), BridgeError> {
        (**self).push(request)
    }
}
