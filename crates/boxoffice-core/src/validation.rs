//! # Validation Module
//!
//! Precondition checks for the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (booking form, CLI)                                   │
//! │  ├── Type validation (deserialization, argument parsing)               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Session invariants (seats, price)                                 │
//! │  └── Quantity must be positive                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: PricingEngine (assumes checked input)                        │
//! │                                                                         │
//! │  No clamping, no defaults: a bad input is an error, full stop.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boxoffice_core::validation::{validate_quantity, validate_total_seats};
//!
//! assert!(validate_quantity(3).is_ok());
//! assert!(validate_total_seats(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::SessionSnapshot;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a ticket quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound here; seat limits are checked against the session
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the number of tickets to reserve.
///
/// Same rule as [`validate_quantity`], reported under its own field name so
/// booking forms can highlight the right input.
pub fn validate_reservation_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "reservation quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the seat capacity of a session.
///
/// ## Rules
/// - Must be positive: the seat ratio divides by it
pub fn validate_total_seats(total_seats: i64) -> ValidationResult<()> {
    if total_seats <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "total_seats".to_string(),
        });
    }

    Ok(())
}

/// Validates reserved seats against capacity.
///
/// ## Rules
/// - `0 <= reserved_seats <= total_seats`
///
/// ## Example
/// ```rust
/// use boxoffice_core::validation::validate_reserved_seats;
///
/// assert!(validate_reserved_seats(10, 10).is_ok());
/// assert!(validate_reserved_seats(11, 10).is_err());
/// assert!(validate_reserved_seats(-1, 10).is_err());
/// ```
pub fn validate_reserved_seats(reserved_seats: i64, total_seats: i64) -> ValidationResult<()> {
    if reserved_seats < 0 || reserved_seats > total_seats {
        return Err(ValidationError::OutOfRange {
            field: "reserved_seats".to_string(),
            min: 0,
            max: total_seats,
        });
    }

    Ok(())
}

/// Validates a base ticket price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free screenings)
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "base_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates every invariant of a session snapshot.
///
/// ## Check Order
/// ```text
/// total_seats > 0 ──► 0 <= reserved <= total ──► base_price >= 0
/// ```
/// The first failure wins.
pub fn validate_session(session: &SessionSnapshot) -> ValidationResult<()> {
    validate_total_seats(session.total_seats)?;
    validate_reserved_seats(session.reserved_seats, session.total_seats)?;
    validate_base_price(session.base_price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
