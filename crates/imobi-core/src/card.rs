//! # Property Card
//!
//! Per-listing UI state: how many days the viewer wants and whether the
//! detail panel is open. The card never touches the catalog; renting
//! produces a [`RentRequest`] for the page to apply.
//!
//! ## Rent Button
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Alugar" (only rendered while expanded)                                │
//! │       │                                                                 │
//! │       ├── collapsed?      ──► blocked, button not drawn (no toast)     │
//! │       ├── logged out?     ──► blocked, "Faça login para alugar"        │
//! │       ├── own listing?    ──► blocked, "Ação não permitida"            │
//! │       ├── already rented? ──► blocked, button disabled (no toast)      │
//! │       ├── days < 1?       ──► blocked, button disabled (no toast)      │
//! │       │                                                                 │
//! │       └── RentRequest { property_id, days }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, RentBlock};
use crate::types::Property;
use crate::validation::validate_rental_days;
use crate::viewer::Viewer;
use crate::wei::Wei;
use crate::MIN_RENTAL_DAYS;

/// Who is looking at which listing. Everything the card derives from
/// outside its own state.
#[derive(Debug, Clone, Copy)]
pub struct CardContext<'a> {
    pub property: &'a Property,
    pub viewer: Viewer,
}

impl<'a> CardContext<'a> {
    pub fn new(property: &'a Property, viewer: Viewer) -> Self {
        CardContext { property, viewer }
    }

    /// The viewer owns the listing.
    pub fn is_owner(&self) -> bool {
        self.property.is_owned_by(self.viewer.current_user_id())
    }

    /// The page lets this viewer rent at all.
    pub fn can_rent(&self) -> bool {
        self.viewer.can_rent()
    }
}

/// A request to rent one listing for a number of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RentRequest {
    pub property_id: String,
    pub days: u64,
}

// =============================================================================
// Card State
// =============================================================================

/// Local state of one card. Lives as long as the page does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    days: u64,
    expanded: bool,
}

impl Default for CardState {
    fn default() -> Self {
        CardState {
            days: MIN_RENTAL_DAYS,
            expanded: false,
        }
    }
}

impl CardState {
    pub fn new() -> Self {
        CardState::default()
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Opens or closes the detail panel; returns the new state.
    pub fn toggle_details(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Sets the day count, clamped to at least one.
    pub fn set_days(&mut self, days: i64) {
        self.days = u64::try_from(days).unwrap_or(0).max(MIN_RENTAL_DAYS);
    }

    /// Sets the day count from the raw text of the numeric input.
    ///
    /// Negative, empty or non-numeric text reads as one day; a number too
    /// large for `u64` saturates.
    pub fn set_days_input(&mut self, input: &str) {
        let input = input.trim();
        let days = match input.parse::<u64>() {
            Ok(days) => days,
            Err(_) if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) => u64::MAX,
            Err(_) => MIN_RENTAL_DAYS,
        };
        self.days = days.max(MIN_RENTAL_DAYS);
    }

    /// `days × price`, exact.
    pub fn total(&self, property: &Property) -> Wei {
        property.rental_total(self.days)
    }

    /// First reason the rent button is refused, if any.
    pub fn blocked_reason(&self, ctx: &CardContext<'_>) -> Option<RentBlock> {
        if !ctx.can_rent() {
            Some(RentBlock::LoginRequired)
        } else if ctx.is_owner() {
            Some(RentBlock::OwnListing)
        } else if ctx.property.is_rented {
            Some(RentBlock::AlreadyRented)
        } else if validate_rental_days(self.days).is_err() {
            Some(RentBlock::InvalidDays)
        } else {
            None
        }
    }

    /// Whether the rent button renders disabled.
    pub fn rent_disabled(&self, ctx: &CardContext<'_>) -> bool {
        self.blocked_reason(ctx).is_some()
    }

    /// Presses "Alugar".
    ///
    /// ## Errors
    /// `CoreError::RentBlocked` with `DetailsHidden` while collapsed, else
    /// the first failing rule. Only `LoginRequired` and `OwnListing` carry
    /// a notice.
    pub fn request_rent(&self, ctx: &CardContext<'_>) -> CoreResult<RentRequest> {
        if !self.expanded {
            return Err(CoreError::RentBlocked(RentBlock::DetailsHidden));
        }
        if let Some(block) = self.blocked_reason(ctx) {
            return Err(CoreError::RentBlocked(block));
        }

        Ok(RentRequest {
            property_id: ctx.property.id.clone(),
            days: self.days,
        })
    }

    /// Everything a surface needs to draw this card.
    pub fn view(&self, ctx: &CardContext<'_>) -> CardView {
        let property = ctx.property;
        let details = self.expanded.then(|| CardDetails {
            description: property.description.clone(),
            days: self.days,
            total_wei: self.total(property),
            rent_enabled: !self.rent_disabled(ctx),
        });

        CardView {
            id: property.id.clone(),
            title: property.title.clone(),
            image_url: property.image_url.clone(),
            image_alt: format!("Imóvel: {} — {}", property.title, property.description),
            price_wei: property.price_wei.clone(),
            is_rented: property.is_rented,
            is_owner: ctx.is_owner(),
            expanded: self.expanded,
            toggle_label: if self.expanded {
                "Ocultar detalhes"
            } else {
                "Ver detalhes"
            }
            .to_string(),
            details,
        }
    }
}

// =============================================================================
// Views
// =============================================================================

/// A rendered card.
///
/// Rented cards are drawn dimmed with an "Alugado" overlay; owned cards
/// carry the "Você é o proprietário" badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    #[ts(as = "String")]
    pub price_wei: Wei,
    pub is_rented: bool,
    pub is_owner: bool,
    pub expanded: bool,
    pub toggle_label: String,
    /// Present only while expanded.
    pub details: Option<CardDetails>,
}

/// The part of a card shown only while expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub description: String,
    pub days: u64,
    #[ts(as = "String")]
    pub total_wei: Wei,
    pub rent_enabled: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::seed_properties;

    fn available() -> Property {
        seed_properties().remove(0)
    }

    fn rented() -> Property {
        seed_properties().remove(1)
    }

    fn expanded_card() -> CardState {
        let mut card = CardState::new();
        card.toggle_details();
        card
    }

    #[test]
    fn test_defaults() {
        let card = CardState::new();
        assert_eq!(card.days(), 1);
        assert!(!card.expanded());
    }

    #[test]
    fn test_set_days_clamps_to_one() {
        let mut card = CardState::new();
        card.set_days(0);
        assert_eq!(card.days(), 1);
        card.set_days(-7);
        assert_eq!(card.days(), 1);
        card.set_days(12);
        assert_eq!(card.days(), 12);
    }

    #[test]
    fn test_set_days_input() {
        let mut card = CardState::new();
        card.set_days_input(" 4 ");
        assert_eq!(card.days(), 4);
        card.set_days_input("abc");
        assert_eq!(card.days(), 1);
        card.set_days_input("");
        assert_eq!(card.days(), 1);
        card.set_days_input("99999999999999999999999");
        assert_eq!(card.days(), u64::MAX);
    }

    #[test]
    fn test_total_is_days_times_price() {
        let property = available();
        let mut card = CardState::new();
        card.set_days(3);
        assert_eq!(card.total(&property).to_string(), "300");
    }

    #[test]
    fn test_total_with_price_beyond_u64() {
        let mut property = available();
        property.price_wei = "18446744073709551616".parse().unwrap(); // 2^64
        let mut card = CardState::new();
        card.set_days_input("18446744073709551615"); // u64::MAX
        assert_eq!(
            card.total(&property).to_string(),
            "340282366920938463444927863358058659840"
        );
    }

    #[test]
    fn test_anonymous_is_told_to_log_in() {
        let property = available();
        let ctx = CardContext::new(&property, Viewer::Anonymous);
        let card = expanded_card();

        assert!(card.rent_disabled(&ctx));
        let err = card.request_rent(&ctx).unwrap_err();
        assert!(matches!(err, CoreError::RentBlocked(RentBlock::LoginRequired)));
        assert_eq!(err.notice().unwrap().title, "Faça login para alugar");
    }

    #[test]
    fn test_owner_cannot_rent_own_listing() {
        let property = available(); // owned by owner-1
        let ctx = CardContext::new(&property, Viewer::Owner);
        let card = expanded_card();

        assert!(ctx.is_owner());
        let err = card.request_rent(&ctx).unwrap_err();
        assert!(matches!(err, CoreError::RentBlocked(RentBlock::OwnListing)));
        assert_eq!(err.notice().unwrap().title, "Ação não permitida");
    }

    #[test]
    fn test_owner_role_may_rent_someone_elses_listing() {
        let mut property = available();
        property.owner_id = "owner-9".to_string();
        let ctx = CardContext::new(&property, Viewer::Owner);
        assert!(expanded_card().request_rent(&ctx).is_ok());
    }

    #[test]
    fn test_rented_listing_is_silently_disabled() {
        let property = rented();
        let ctx = CardContext::new(&property, Viewer::Renter);
        let err = expanded_card().request_rent(&ctx).unwrap_err();
        assert!(matches!(err, CoreError::RentBlocked(RentBlock::AlreadyRented)));
        assert!(err.notice().is_none());
    }

    #[test]
    fn test_collapsed_card_refuses_silently() {
        let property = available();
        let ctx = CardContext::new(&property, Viewer::Renter);
        let mut card = CardState::new();

        let err = card.request_rent(&ctx).unwrap_err();
        assert!(matches!(err, CoreError::RentBlocked(RentBlock::DetailsHidden)));
        assert!(err.notice().is_none());

        // Even the logged-out toast needs the button on screen.
        let anonymous = CardContext::new(&property, Viewer::Anonymous);
        assert!(matches!(
            card.request_rent(&anonymous),
            Err(CoreError::RentBlocked(RentBlock::DetailsHidden))
        ));

        card.toggle_details();
        assert!(card.request_rent(&ctx).is_ok());
    }

    #[test]
    fn test_renter_gets_request() {
        let property = available();
        let ctx = CardContext::new(&property, Viewer::Renter);
        let mut card = expanded_card();
        card.set_days(3);

        let request = card.request_rent(&ctx).unwrap();
        assert_eq!(
            request,
            RentRequest {
                property_id: "p1".to_string(),
                days: 3
            }
        );
    }

    #[test]
    fn test_view_hides_details_until_expanded() {
        let property = available();
        let ctx = CardContext::new(&property, Viewer::Renter);
        let mut card = CardState::new();

        let view = card.view(&ctx);
        assert!(view.details.is_none());
        assert_eq!(view.toggle_label, "Ver detalhes");

        card.toggle_details();
        card.set_days(3);
        let view = card.view(&ctx);
        let details = view.details.unwrap();
        assert_eq!(view.toggle_label, "Ocultar detalhes");
        assert_eq!(details.total_wei.to_string(), "300");
        assert!(details.rent_enabled);
        assert_eq!(details.description, property.description);
    }

    #[test]
    fn test_view_badges() {
        let owned = available();
        let view = CardState::new().view(&CardContext::new(&owned, Viewer::Owner));
        assert!(view.is_owner);
        assert!(!view.is_rented);

        let taken = rented();
        let view = CardState::new().view(&CardContext::new(&taken, Viewer::Renter));
        assert!(view.is_rented);
        assert!(!view.is_owner);
    }
}
