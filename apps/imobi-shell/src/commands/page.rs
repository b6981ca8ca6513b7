//! # Page Commands
//!
//! The page view, the two session switches and the auth buttons.
//!
//! ## Session Switches
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Header:  Simular login [ ]   Proprietário [ ]   [Cadastrar imóvel]    │
//! │                 │                   │                                   │
//! │                 ▼                   ▼                                   │
//! │        set_logged_in(on)    set_owner_role(on)                          │
//! │                 │                   │                                   │
//! │                 │                   ├── logged out → CONTROL_DISABLED   │
//! │                 ▼                   ▼                                   │
//! │          Viewer changes; form appears/disappears with the owner role    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use imobi_core::page::PageView;

use super::reject;
use crate::error::ApiError;
use crate::state::{NoticeState, PageState};

/// Gets the current page.
#[must_use]
pub fn get_page(page: &PageState) -> PageView {
    debug!("get_page command");
    page.with_page(|p| p.view())
}

/// Flips the "Simular login" switch.
pub fn set_logged_in(page: &PageState, logged_in: bool) -> PageView {
    debug!(logged_in, "set_logged_in command");

    page.with_page_mut(|p| {
        let viewer = p.set_logged_in(logged_in);
        info!(?viewer, "session changed");
        p.view()
    })
}

/// Flips the "Proprietário" switch.
///
/// ## Errors
/// `CONTROL_DISABLED` while logged out.
pub fn set_owner_role(
    page: &PageState,
    notices: &NoticeState,
    owner: bool,
) -> Result<PageView, ApiError> {
    debug!(owner, "set_owner_role command");

    page.with_page_mut(|p| {
        let viewer = p.set_owner_role(owner).map_err(|e| reject(notices, e))?;
        info!(?viewer, "session changed");
        Ok(p.view())
    })
}

/// "Entrar". Authentication is not implemented; only a toast is raised.
pub fn request_login(page: &PageState, notices: &NoticeState) {
    debug!("request_login command");
    notices.push(page.with_page(|p| p.request_auth()));
}

/// "Criar conta". Same as [`request_login`].
pub fn request_signup(page: &PageState, notices: &NoticeState) {
    debug!("request_signup command");
    notices.push(page.with_page(|p| p.request_auth()));
}
