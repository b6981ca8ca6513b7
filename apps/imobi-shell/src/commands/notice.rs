//! # Notice Commands
//!
//! Hands queued toasts to the surface.

use tracing::debug;

use crate::state::{NoticeState, RaisedNotice};

/// Takes every pending toast, oldest first.
pub fn drain_notices(notices: &NoticeState) -> Vec<RaisedNotice> {
    let drained = notices.drain();
    debug!(count = drained.len(), "drain_notices command");
    drained
}
