//! # Card Commands
//!
//! Actions on a single listing card.
//!
//! ## Card Interaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────────────────────────────────┐                       │
//! │  │  Apto contemporâneo no centro                │                       │
//! │  │  Valor por dia                     100 wei   │                       │
//! │  │  ─────────── expanded only ───────────────   │                       │
//! │  │  Dias de locação [ 3 ]      Total  300 wei   │ ◄── set_rental_days   │
//! │  │  [Ocultar detalhes]               [Alugar]   │ ◄── rent_property     │
//! │  └──────────────────────────────────────────────┘                       │
//! │          ▲                                                              │
//! │          └── toggle_details                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use imobi_core::page::PageView;

use super::reject;
use crate::error::ApiError;
use crate::state::{NoticeState, PageState};

/// "Ver detalhes" / "Ocultar detalhes".
///
/// ## Errors
/// `NOT_FOUND` for an unknown listing id.
pub fn toggle_details(
    page: &PageState,
    notices: &NoticeState,
    property_id: &str,
) -> Result<PageView, ApiError> {
    debug!(property_id, "toggle_details command");

    page.with_page_mut(|p| {
        p.toggle_details(property_id)
            .map_err(|e| reject(notices, e))?;
        Ok(p.view())
    })
}

/// Types into the "Dias de locação" input. Garbage and values below one
/// read as one day.
///
/// ## Errors
/// `NOT_FOUND` for an unknown listing id.
pub fn set_rental_days(
    page: &PageState,
    notices: &NoticeState,
    property_id: &str,
    input: &str,
) -> Result<PageView, ApiError> {
    debug!(property_id, input, "set_rental_days command");

    page.with_page_mut(|p| {
        p.set_rental_days_input(property_id, input)
            .map_err(|e| reject(notices, e))?;
        Ok(p.view())
    })
}

/// "Alugar".
///
/// ## Errors
/// - `NOT_FOUND` for an unknown listing id
/// - `FORBIDDEN` when logged out or renting one's own listing (toast queued)
/// - `CONTROL_DISABLED` while the card is collapsed or the listing is
///   already rented
pub fn rent_property(
    page: &PageState,
    notices: &NoticeState,
    property_id: &str,
) -> Result<PageView, ApiError> {
    debug!(property_id, "rent_property command");

    page.with_page_mut(|p| {
        let days = p.card(property_id).days();
        let notice = p
            .rent_from_card(property_id)
            .map_err(|e| reject(notices, e))?;
        info!(property_id, days, "listing rented");
        notices.push(notice);
        Ok(p.view())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::page::{set_logged_in, set_owner_role};
    use crate::error::ErrorCode;

    #[test]
    fn test_renter_rents_three_days() {
        let page = PageState::seeded();
        let notices = NoticeState::new();
        set_logged_in(&page, true);

        toggle_details(&page, &notices, "p1").unwrap();
        let view = set_rental_days(&page, &notices, "p1", "3").unwrap();
        let card = view.cards.iter().find(|c| c.id == "p1").unwrap();
        assert_eq!(card.details.as_ref().unwrap().total_wei.to_string(), "300");

        let view = rent_property(&page, &notices, "p1").unwrap();
        assert!(view.cards.iter().all(|c| c.is_rented));

        let drained = notices.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].notice.description, "Imóvel selecionado para 3 dia(s).");
    }

    #[test]
    fn test_second_rent_is_disabled() {
        let page = PageState::seeded();
        let notices = NoticeState::new();
        set_logged_in(&page, true);
        toggle_details(&page, &notices, "p1").unwrap();
        rent_property(&page, &notices, "p1").unwrap();
        notices.drain();

        let err = rent_property(&page, &notices, "p1").unwrap_err();
        assert_eq!(err.code, ErrorCode::ControlDisabled);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_owner_is_refused_with_toast() {
        let page = PageState::seeded();
        let notices = NoticeState::new();
        set_logged_in(&page, true);
        set_owner_role(&page, &notices, true).unwrap();
        toggle_details(&page, &notices, "p1").unwrap();

        let err = rent_property(&page, &notices, "p1").unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(notices.drain()[0].notice.title, "Ação não permitida");
    }

    #[test]
    fn test_logged_out_is_refused_with_toast() {
        let page = PageState::seeded();
        let notices = NoticeState::new();
        toggle_details(&page, &notices, "p1").unwrap();

        let err = rent_property(&page, &notices, "p1").unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(notices.drain()[0].notice.title, "Faça login para alugar");
    }

    #[test]
    fn test_collapsed_card_is_disabled() {
        let page = PageState::seeded();
        let notices = NoticeState::new();
        set_logged_in(&page, true);

        let err = rent_property(&page, &notices, "p1").unwrap_err();

        assert_eq!(err.code, ErrorCode::ControlDisabled);
        assert!(notices.is_empty());
        assert!(!page.with_page(|p| p.catalog().get("p1").unwrap().is_rented));
    }

    #[test]
    fn test_unknown_listing() {
        let page = PageState::seeded();
        let notices = NoticeState::new();
        let err = toggle_details(&page, &notices, "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
