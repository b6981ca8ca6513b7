//! # State Module
//!
//! Manages application state for the listing shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! command receives only the state it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  PageState   │  │ NoticeState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  site_name       │              │
//! │  │    Page      │  │   Vec<...>   │  │  currency_unit   │              │
//! │  │  >>          │  │  >>          │  │  seed, output    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  SINGLE WRITER:                                                        │
//! │  • PageState: the only owner of listings; commands lock it briefly     │
//! │  • NoticeState: toasts queued by commands, drained by the surface      │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod notice;
mod page;

pub use config::{ConfigError, ConfigState, OutputMode};
pub use notice::{NoticeState, RaisedNotice};
pub use page::PageState;
