//! # imobi-core: Pure Listing Logic for Imobiliária Wei
//!
//! This crate holds the whole rental-listing state model as plain data and
//! pure functions. Nothing here touches a terminal, a file or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Imobiliária Wei Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Surface (terminal / webview)                    │   │
//! │  │    Session toggles ──► Form ──► Card grid ──► Notices           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    imobi-shell commands                         │   │
//! │  │    set_logged_in, submit_property, rent_property, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ imobi-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │   wei   │ │  form   │ │  card   │ │  page   │  │   │
//! │  │   │Property │ │   Wei   │ │  Draft  │ │  days   │ │ Catalog │  │   │
//! │  │   │ Viewer  │ │ BigUint │ │ submit  │ │  total  │ │  sort   │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE STATE             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Property` record and the seed listings
//! - [`wei`] - Arbitrary-precision wei amounts
//! - [`viewer`] - Simulated session as a capability enum
//! - [`validation`] - Field rules for new listings
//! - [`notice`] - Toast notifications raised by every operation
//! - [`form`] - The creation form draft
//! - [`card`] - Per-listing card state and rent requests
//! - [`catalog`] - The owned list of listings
//! - [`page`] - The orchestrator tying all of the above together
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use imobi_core::page::Page;
//!
//! let mut page = Page::new();
//! page.set_logged_in(true);
//!
//! // The first card in display order is the available seed listing
//! let id = page.display_order()[0].id.clone();
//! page.toggle_details(&id).unwrap();
//! page.set_rental_days(&id, 3).unwrap();
//! let notice = page.rent_from_card(&id).unwrap();
//!
//! assert!(notice.description.contains('3'));
//! assert!(page.catalog().get(&id).unwrap().is_rented);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod card;
pub mod catalog;
pub mod error;
pub mod form;
pub mod notice;
pub mod page;
pub mod types;
pub mod validation;
pub mod viewer;
pub mod wei;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, RentBlock, ValidationError};
pub use notice::{Notice, NoticeKind};
pub use types::Property;
pub use viewer::Viewer;
pub use wei::Wei;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// User id attached to the simulated owner session.
///
/// The seed listing `p1` belongs to this user, so an owner session sees the
/// ownership badge on it.
pub const OWNER_USER_ID: &str = "owner-1";

/// User id attached to the simulated renter session.
pub const RENTER_USER_ID: &str = "renter-1";

/// Smallest rental duration a card accepts.
pub const MIN_RENTAL_DAYS: u64 = 1;

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Maximum image URL length, in characters.
pub const MAX_IMAGE_URL_LEN: usize = 2048;
