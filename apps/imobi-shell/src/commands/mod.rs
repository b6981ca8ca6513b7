//! # Commands Module
//!
//! One function per user action on the listing page.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports, shared helpers)
//! ├── page.rs     ◄─── Page view, session switches, auth buttons
//! ├── listing.rs  ◄─── Creation form fields and submit
//! ├── card.rs     ◄─── Details toggle, rental days, rent
//! ├── notice.rs   ◄─── Draining queued toasts
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Surface: "alugar 1"                                                    │
//! │         │                                                               │
//! │         │ (position → listing id)                                       │
//! │         ▼                                                               │
//! │  fn rent_property(                                                      │
//! │      page: &PageState,        ◄── only the state it needs              │
//! │      notices: &NoticeState,                                             │
//! │      property_id: &str,                                                 │
//! │  ) -> Result<PageView, ApiError>                                        │
//! │         │                                                               │
//! │         ├── toast? ──► notices.push(..)                                 │
//! │         ▼                                                               │
//! │  Surface re-renders the returned PageView                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating commands return the fresh [`PageView`](imobi_core::page::PageView),
//! the same way every cart command hands back the whole cart.

pub mod card;
pub mod config;
pub mod listing;
pub mod notice;
pub mod page;

use imobi_core::CoreError;

use crate::error::ApiError;
use crate::state::NoticeState;

/// Queues the toast for `err` (if it has one) and converts it.
fn reject(notices: &NoticeState, err: CoreError) -> ApiError {
    notices.push_opt(err.notice());
    ApiError::from(err)
}
