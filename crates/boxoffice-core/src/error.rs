//! # Error Types
//!
//! Domain-specific error types for boxoffice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boxoffice-core errors (this file)                                     │
//! │  ├── CoreError        - Domain errors                                  │
//! │  │   ├── InvalidArgument   (the only pricing failure)                  │
//! │  │   └── InsufficientSeats (reservation checks only)                   │
//! │  └── ValidationError  - Which field failed and why                     │
//! │                                                                         │
//! │  quote-cli errors (in app)                                             │
//! │  └── ConfigError      - Bad configuration values                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError::InvalidArgument → caller           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String
//! 4. Precondition failures surface immediately, no default substitution

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An input broke a precondition of the pricing engine.
    ///
    /// ## When This Occurs
    /// - Quantity is zero or negative
    /// - Session has no seats (`total_seats <= 0`)
    /// - Reserved seats outside `[0, total_seats]`
    /// - Negative base price
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Not enough free seats to hold the requested tickets.
    ///
    /// ## User Workflow
    /// ```text
    /// Reserve (qty: 5)
    ///      │
    ///      ▼
    /// Check seats: available=3
    ///      │
    ///      ▼
    /// InsufficientSeats { available: 3, requested: 5 }
    /// ```
    #[error("Insufficient seats: available {available}, requested {requested}")]
    InsufficientSeats { available: i64, requested: i64 },
}

impl CoreError {
    /// Returns true for precondition violations (`InvalidArgument`).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These name the offending field so callers can point the user at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
