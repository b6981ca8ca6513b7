//! # Viewer
//!
//! The simulated session. Two switches on the page ("Simular login" and
//! "Proprietário") map onto three states, so "owner but logged out" cannot
//! be represented.
//!
//! ```text
//!              login on                owner on
//!  Anonymous ───────────► Renter ◄──────────────► Owner
//!      ▲      login off     │        owner off      │
//!      └────────────────────┴───────────────────────┘
//!                         login off
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::{OWNER_USER_ID, RENTER_USER_ID};

/// Who is looking at the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Viewer {
    /// Logged out.
    #[default]
    Anonymous,
    /// Logged in without the owner role.
    Renter,
    /// Logged in with the owner role.
    Owner,
}

impl Viewer {
    /// The fixed user id of this session, `None` when logged out.
    pub const fn current_user_id(self) -> Option<&'static str> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Renter => Some(RENTER_USER_ID),
            Viewer::Owner => Some(OWNER_USER_ID),
        }
    }

    /// State of the "Simular login" switch.
    pub const fn is_logged_in(self) -> bool {
        !matches!(self, Viewer::Anonymous)
    }

    /// State of the "Proprietário" switch.
    pub const fn is_owner_role(self) -> bool {
        matches!(self, Viewer::Owner)
    }

    /// Any logged-in viewer may rent (ownership is checked per listing).
    pub const fn can_rent(self) -> bool {
        self.is_logged_in()
    }

    /// Only owners see the creation form.
    pub const fn can_create(self) -> bool {
        self.is_owner_role()
    }

    /// Applies the login switch. Logging in starts as a renter.
    pub const fn with_logged_in(self, logged_in: bool) -> Viewer {
        match (self, logged_in) {
            (_, false) => Viewer::Anonymous,
            (Viewer::Anonymous, true) => Viewer::Renter,
            (current, true) => current,
        }
    }

    /// Applies the owner-role switch.
    ///
    /// ## Errors
    /// `SessionToggleDisabled` while logged out: the switch is disabled.
    pub fn with_owner_role(self, owner: bool) -> CoreResult<Viewer> {
        match (self, owner) {
            (Viewer::Anonymous, _) => Err(CoreError::SessionToggleDisabled),
            (_, true) => Ok(Viewer::Owner),
            (_, false) => Ok(Viewer::Renter),
        }
    }
}
