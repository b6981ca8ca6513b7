//! # Domain Types
//!
//! The listing record and the two listings every session starts with.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Property Lifecycle                              │
//! │                                                                         │
//! │   PropertyForm::submit ──► Catalog::create ──► (available)             │
//! │    fresh UUID v4 id          prepended            is_rented = false     │
//! │    owner = current user                               │                 │
//! │                                                       │ Catalog::rent   │
//! │                                                       ▼                 │
//! │                                                   (rented)              │
//! │                                                  is_rented = true       │
//! │                                                                         │
//! │   No transition back. Listings are never deleted.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::wei::Wei;

// =============================================================================
// Property
// =============================================================================

/// A rentable listing with a per-day price.
///
/// ## Serialization
/// ```json
/// {
///   "id": "p1",
///   "title": "Apto contemporâneo no centro",
///   "description": "...",
///   "imageUrl": "https://...",
///   "priceWei": "100",
///   "ownerId": "owner-1",
///   "isRented": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique identifier within the catalog.
    pub id: String,

    pub title: String,

    pub description: String,

    /// Photo shown on the card.
    pub image_url: String,

    /// Price per day.
    #[ts(as = "String")]
    pub price_wei: Wei,

    /// User id of the listing's owner.
    pub owner_id: String,

    /// Set once by a rent request, never cleared.
    pub is_rented: bool,
}

impl Property {
    /// Checks whether `user_id` owns this listing. `None` (logged out)
    /// owns nothing.
    pub fn is_owned_by(&self, user_id: Option<&str>) -> bool {
        user_id.is_some_and(|id| id == self.owner_id)
    }

    /// Price of renting for `days` days.
    pub fn rental_total(&self, days: u64) -> Wei {
        self.price_wei.times_days(days)
    }
}

// =============================================================================
// Seed Data
// =============================================================================

/// The two listings a fresh page starts with: one available, one rented.
pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "p1".to_string(),
            title: "Apto contemporâneo no centro".to_string(),
            description: "Apartamento com 2 quartos, vista aberta e vaga. Próximo ao metrô."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1600&auto=format&fit=crop".to_string(),
            price_wei: Wei::from(100u64),
            owner_id: "owner-1".to_string(),
            is_rented: false,
        },
        Property {
            id: "p2".to_string(),
            title: "Casa ampla com jardim".to_string(),
            description: "Espaço ideal para família, área gourmet e escritório iluminado."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1502005229762-cf1b2da7c52f?q=80&w=1600&auto=format&fit=crop".to_string(),
            price_wei: Wei::from(50u64),
            owner_id: "owner-2".to_string(),
            is_rented: true,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OWNER_USER_ID;

    #[test]
    fn test_seed_has_one_available_and_one_rented() {
        let seed = seed_properties();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed.iter().filter(|p| p.is_rented).count(), 1);
        assert_eq!(seed[0].owner_id, OWNER_USER_ID);
    }

    #[test]
    fn test_is_owned_by() {
        let p1 = &seed_properties()[0];
        assert!(p1.is_owned_by(Some("owner-1")));
        assert!(!p1.is_owned_by(Some("renter-1")));
        assert!(!p1.is_owned_by(None));
    }

    #[test]
    fn test_rental_total() {
        let p1 = &seed_properties()[0];
        assert_eq!(p1.rental_total(3), Wei::from(300u64));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(&seed_properties()[1]).unwrap();
        assert_eq!(json["priceWei"], "50");
        assert_eq!(json["ownerId"], "owner-2");
        assert_eq!(json["isRented"], true);
        assert!(json["imageUrl"].as_str().unwrap().starts_with("https://"));
    }
}
