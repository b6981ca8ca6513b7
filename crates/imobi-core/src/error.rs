//! # Error Types
//!
//! Domain-specific error types for imobi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  imobi-core errors (this file)                                         │
//! │  ├── CoreError        - Listing, session and rent rule violations      │
//! │  ├── RentBlock        - Why a rent request was refused                 │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  imobi-shell errors (in app)                                           │
//! │  └── ApiError         - What the surface sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError (+ Notice) → Surface     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal. Every failure leaves state untouched and, where
//! the page raises a toast, carries a [`Notice`] for the user.

use thiserror::Error;

use crate::notice::Notice;

// =============================================================================
// Core Error
// =============================================================================

/// Listing and session rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No listing carries this id.
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// A card refused to produce a rent request.
    #[error("Rent blocked: {0}")]
    RentBlocked(RentBlock),

    /// The owner-role switch was flipped while nobody is logged in.
    ///
    /// The switch is rendered disabled in that state, so the request
    /// changes nothing and raises no notice.
    #[error("Owner role cannot change while logged out")]
    SessionToggleDisabled,

    /// The creation form was touched while it is not rendered.
    #[error("Property form is only available to logged-in owners")]
    FormHidden,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns the toast shown to the user for this failure, if any.
    ///
    /// Disabled controls (rented listing, owner switch while logged out)
    /// produce no toast: the control simply does nothing.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            CoreError::RentBlocked(block) => block.notice(),
            CoreError::Validation(err) => Some(err.notice()),
            CoreError::PropertyNotFound(_)
            | CoreError::SessionToggleDisabled
            | CoreError::FormHidden => None,
        }
    }
}

// =============================================================================
// Rent Block
// =============================================================================

/// Reason a card refused to rent.
///
/// Checked in this order, so a logged-out owner is told to log in first.
/// A collapsed card refuses before any of them: its button is not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RentBlock {
    /// "Alugar" only exists on an expanded card.
    #[error("details collapsed, rent button not shown")]
    DetailsHidden,

    /// Renting needs a logged-in session.
    #[error("login required")]
    LoginRequired,

    /// The viewer owns the listing.
    #[error("owner cannot rent own listing")]
    OwnListing,

    /// The listing is already rented.
    #[error("listing already rented")]
    AlreadyRented,

    /// The day count is below one.
    #[error("rental days must be at least 1")]
    InvalidDays,
}

impl RentBlock {
    /// Only the two explanatory cases raise a toast; the rest are a
    /// disabled button.
    pub fn notice(self) -> Option<Notice> {
        match self {
            RentBlock::LoginRequired => Some(Notice::login_to_rent()),
            RentBlock::OwnListing => Some(Notice::owner_cannot_rent()),
            RentBlock::DetailsHidden | RentBlock::AlreadyRented | RentBlock::InvalidDays => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when form input doesn't meet requirements. `field` holds the
/// draft field key (`title`, `description`, `image_url`, `price_wei`, `days`).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-numeric wei amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate listing id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Returns the toast for this failure.
    ///
    /// Missing or non-positive fields share the single "fill everything"
    /// toast of the creation form.
    pub fn notice(&self) -> Notice {
        match self {
            ValidationError::Required { .. }
            | ValidationError::MustBePositive { .. }
            | ValidationError::InvalidFormat { .. } => Notice::fill_all_fields(),
            ValidationError::TooLong { field, max } => {
                Notice::field_too_long(field_label(field), *max)
            }
            ValidationError::Duplicate { value, .. } => Notice::duplicate_listing(value),
        }
    }
}

/// Portuguese label shown next to each form field.
fn field_label(field: &str) -> &str {
    match field {
        "title" => "Título",
        "description" => "Descrição",
        "image_url" => "Link para foto",
        "price_wei" => "Valor por dia (wei)",
        "days" => "Dias de locação",
        other => other,
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PropertyNotFound("p9".to_string());
        assert_eq!(err.to_string(), "Property not found: p9");

        let err = CoreError::RentBlocked(RentBlock::OwnListing);
        assert_eq!(err.to_string(), "Rent blocked: owner cannot rent own listing");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "title must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price_wei".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_missing_fields_share_one_notice() {
        let required = ValidationError::Required {
            field: "image_url".to_string(),
        };
        let price = ValidationError::MustBePositive {
            field: "price_wei".to_string(),
        };
        assert_eq!(required.notice(), Notice::fill_all_fields());
        assert_eq!(price.notice(), Notice::fill_all_fields());
    }

    #[test]
    fn test_too_long_notice_names_the_field() {
        let err = ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        };
        assert!(err.notice().description.starts_with("Título"));
    }

    #[test]
    fn test_disabled_controls_raise_no_notice() {
        assert!(CoreError::RentBlocked(RentBlock::AlreadyRented).notice().is_none());
        assert!(CoreError::RentBlocked(RentBlock::InvalidDays).notice().is_none());
        assert!(CoreError::RentBlocked(RentBlock::DetailsHidden).notice().is_none());
        assert!(CoreError::SessionToggleDisabled.notice().is_none());
        assert!(CoreError::RentBlocked(RentBlock::LoginRequired).notice().is_some());
        assert!(CoreError::RentBlocked(RentBlock::OwnListing).notice().is_some());
    }
}
