//! # Notice State
//!
//! The toast queue. Commands push, the surface drains after each action.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use imobi_core::Notice;

/// A notice together with when it was raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaisedNotice {
    #[serde(flatten)]
    pub notice: Notice,
    pub raised_at: DateTime<Utc>,
}

/// Pending toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NoticeState {
    pending: Arc<Mutex<Vec<RaisedNotice>>>,
}

impl NoticeState {
    pub fn new() -> Self {
        NoticeState::default()
    }

    /// Queues a notice stamped with the current time.
    pub fn push(&self, notice: Notice) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.push(RaisedNotice {
            notice,
            raised_at: Utc::now(),
        });
    }

    /// Queues the notice if there is one.
    pub fn push_opt(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.push(notice);
        }
    }

    /// Takes every pending notice.
    pub fn drain(&self) -> Vec<RaisedNotice> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *pending)
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
