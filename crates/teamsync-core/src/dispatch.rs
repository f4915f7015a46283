//! Fire-and-forget push dispatcher.
//!
//! Every local mutation dispatches exactly one bridge request. Transport
//! failures are logged and reported as a boolean sync marker; callers
//! never see an error, there is no retry, and concurrent dispatches are
//! independent. The next user-triggered mutation or manual refresh is the
//! de facto retry path.

use tracing::{debug, warn};

use crate::bridge::{Bridge, Collection, PushRequest};
use crate::row::Row;

/// Dispatch one upsert. Returns whether the transport accepted it.
pub fn upsert<B: Bridge>(bridge: &B, collection: Collection, row: Row) -> bool {
    send(bridge, PushRequest::upsert(collection, row))
}

/// Dispatch one delete by identifying value.
pub fn delete<B: Bridge>(bridge: &B, collection: Collection, id: &str) -> bool {
    send(bridge, PushRequest::delete(collection, id))
}

fn send<B: Bridge>(bridge: &B, request: PushRequest) -> bool {
    match bridge.push(&request) {
        Ok(()) => {
            debug!(sheet = request.target_sheet, "push accepted");
            true
        }
        Err(err) => {
            warn!(sheet = request.target_sheet, error = %err, "push failed; local model remains source of truth");
            false
        }
    }
}
