//! # Wei Module
//!
//! Provides the `Wei` type for prices and rental totals.
//!
//! ## Why Unbounded Integers?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE SAFE-INTEGER PROBLEM                                               │
//! │                                                                         │
//! │  1 ether = 1_000_000_000_000_000_000 wei  (already > 2^53)              │
//! │  30 days × 10^24 wei/day overflows u64 and loses digits in f64          │
//! │                                                                         │
//! │  OUR SOLUTION: one BigUint end to end                                   │
//! │    price (Wei) × days (u64) = total (Wei), exact for any size          │
//! │    serialized as a decimal string so no boundary truncates it          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use imobi_core::wei::Wei;
//!
//! let price: Wei = "1000000000000000000".parse().unwrap();
//! let total = price.times_days(30);
//! assert_eq!(total.to_string(), "30000000000000000000");
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// =============================================================================
// Wei Type
// =============================================================================

/// A non-negative amount of wei of unbounded size.
///
/// Used for every per-day price and every rental total; there is no
/// fixed-width storage type anywhere in the model.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wei(BigUint);

impl Wei {
    /// Zero wei.
    pub fn zero() -> Self {
        Wei(BigUint::zero())
    }

    /// Checks if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero()
    }

    /// Multiplies a per-day price by a day count.
    ///
    /// ## Example
    /// ```rust
    /// use imobi_core::wei::Wei;
    ///
    /// let price = Wei::from(100u64);
    /// assert_eq!(price.times_days(3), Wei::from(300u64));
    /// ```
    pub fn times_days(&self, days: u64) -> Wei {
        Wei(&self.0 * days)
    }

    /// Parses the content of a numeric input field.
    ///
    /// Anything that is not a plain decimal number reads as zero, which the
    /// form then rejects as a non-positive price.
    pub fn parse_lenient(input: &str) -> Wei {
        input.parse().unwrap_or_default()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Errors from reading a wei amount out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeiParseError {
    /// Nothing but whitespace.
    #[error("wei amount is empty")]
    Empty,

    /// A character other than an ASCII digit.
    #[error("wei amount must contain only digits, found {0:?}")]
    InvalidDigit(char),
}

impl FromStr for Wei {
    type Err = WeiParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() {
            return Err(WeiParseError::Empty);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(WeiParseError::InvalidDigit(bad));
        }

        // Only ASCII digits remain, so parse_bytes cannot fail.
        BigUint::parse_bytes(digits.as_bytes(), 10)
            .map(Wei)
            .ok_or(WeiParseError::Empty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal digits, no unit and no separators.
impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Wei {
    fn from(value: u64) -> Self {
        Wei(BigUint::from(value))
    }
}

impl From<u128> for Wei {
    fn from(value: u128) -> Self {
        Wei(BigUint::from(value))
    }
}

impl From<BigUint> for Wei {
    fn from(value: BigUint) -> Self {
        Wei(value)
    }
}

/// Serialized as a decimal string, e.g. `"1000000000000000000"`.
impl Serialize for Wei {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Accepts a decimal string or a non-negative JSON integer.
impl<'de> Deserialize<'de> for Wei {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeiVisitor;

        impl Visitor<'_> for WeiVisitor {
            type Value = Wei;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string or a non-negative integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Wei, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Wei, E> {
                Ok(Wei::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Wei, E> {
                u64::try_from(v)
                    .map(Wei::from)
                    .map_err(|_| E::custom("wei amount cannot be negative"))
            }
        }

        deserializer.deserialize_any(WeiVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
