//! # Validation Module
//!
//! Field rules for new listings and rental durations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input parsing                                                │
//! │  ├── Wei::parse_lenient (garbage reads as zero)                        │
//! │  └── CardState::set_days_input (garbage reads as one day)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required text fields (empty string only)                          │
//! │  ├── Length ceilings                                                   │
//! │  ├── Positive price                                                    │
//! │  └── Unique listing id                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Failure → ValidationError → Notice, nothing is created                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use imobi_core::validation::{validate_title, validate_price_wei};
//! use imobi_core::Wei;
//!
//! assert!(validate_title("Casa na praia").is_ok());
//! assert!(validate_title("").is_err());
//! assert!(validate_price_wei(&Wei::zero()).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Property;
use crate::wei::Wei;
use crate::{MAX_DESCRIPTION_LEN, MAX_IMAGE_URL_LEN, MAX_TITLE_LEN, MIN_RENTAL_DAYS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks a required text field.
///
/// Only the empty string counts as missing; whitespace is kept as typed.
fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a listing title.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_text("title", title, MAX_TITLE_LEN)
}

/// Validates a listing description.
///
/// ## Rules
/// - Must not be empty
/// - At most 2000 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    validate_text("description", description, MAX_DESCRIPTION_LEN)
}

/// Validates the photo link.
///
/// ## Rules
/// - Must not be empty
/// - At most 2048 characters
pub fn validate_image_url(image_url: &str) -> ValidationResult<()> {
    validate_text("image_url", image_url, MAX_IMAGE_URL_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a per-day price.
///
/// ## Rules
/// - Must be positive (> 0); free listings are not accepted
pub fn validate_price_wei(price: &Wei) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price_wei".to_string(),
        });
    }

    Ok(())
}

/// Validates a rental duration.
pub fn validate_rental_days(days: u64) -> ValidationResult<()> {
    if days < MIN_RENTAL_DAYS {
        return Err(ValidationError::MustBePositive {
            field: "days".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that `id` is not used by any listing in `existing`.
pub fn validate_unique_id(existing: &[Property], id: &str) -> ValidationResult<()> {
    if existing.iter().any(|p| p.id == id) {
        return Err(ValidationError::Duplicate {
            field: "id".to_string(),
            value: id.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
