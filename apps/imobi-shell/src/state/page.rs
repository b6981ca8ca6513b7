//! # Page State
//!
//! Wraps the single [`Page`] the shell drives.
//!
//! ## Page Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Page State Operations                                │
//! │                                                                         │
//! │  User Action              Command                 Page Change           │
//! │  ───────────              ───────                 ───────────           │
//! │                                                                         │
//! │  login on ───────────────► set_logged_in() ─────► viewer = Renter      │
//! │                                                                         │
//! │  campo titulo ... ───────► update_form_field() ─► draft.title = ...    │
//! │                                                                         │
//! │  salvar ─────────────────► submit_property() ───► catalog.insert(0, …) │
//! │                                                                         │
//! │  alugar 1 ───────────────► rent_property() ─────► is_rented = true     │
//! │                                                                         │
//! │  (after every action) ──► get_page() ──────────► (read only)           │
//! │                                                                         │
//! │  NOTE: Writes and reads both take the lock, and release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use imobi_core::page::Page;

/// Shared handle to the page.
///
/// `Arc<Mutex<_>>` keeps a single writer even if a surface dispatches
/// commands from more than one thread.
#[derive(Debug, Clone)]
pub struct PageState {
    page: Arc<Mutex<Page>>,
}

impl PageState {
    /// Wraps an existing page.
    pub fn new(page: Page) -> Self {
        PageState {
            page: Arc::new(Mutex::new(page)),
        }
    }

    /// A seeded, logged-out page.
    pub fn seeded() -> Self {
        PageState::new(Page::new())
    }

    /// Executes a function with read access to the page.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = page_state.with_page(|page| page.view());
    /// ```
    pub fn with_page<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Page) -> R,
    {
        let page = self.page.lock().unwrap_or_else(PoisonError::into_inner);
        f(&page)
    }

    /// Executes a function with write access to the page.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// page_state.with_page_mut(|page| page.set_logged_in(true));
    /// ```
    pub fn with_page_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Page) -> R,
    {
        let mut page = self.page.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut page)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imobi_core::Viewer;

    #[test]
    fn test_writes_are_visible_to_reads() {
        let state = PageState::seeded();
        state.with_page_mut(|page| page.set_logged_in(true));
        assert_eq!(state.with_page(|page| page.viewer()), Viewer::Renter);
    }

    #[test]
    fn test_clones_share_one_page() {
        let state = PageState::new(Page::empty());
        let other = state.clone();
        other.with_page_mut(|page| page.set_logged_in(true));
        assert!(state.with_page(|page| page.viewer().is_logged_in()));
        assert!(state.with_page(|page| page.catalog().is_empty()));
    }
}
