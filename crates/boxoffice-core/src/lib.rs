//! # boxoffice-core: Pure Ticket Pricing for Box Office
//!
//! This crate is the **heart** of Box Office. It prices tickets for a
//! scheduled performance as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Box Office Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Booking / Scheduling (external collaborators)            │   │
//! │  │    Session catalogue ──► Seat bookkeeping ──► Checkout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ SessionSnapshot + quantity            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ boxoffice-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Session  │  │   Money   │  │  Engine   │  │   rules   │  │   │
//! │  │   │ PerfType  │  │ (decimal) │  │  Quotes   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ total price                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/quote-cli (thin wrapper)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (SessionSnapshot, PerformanceType, SurchargeRate)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`pricing`] - PricingEngine, quotes and the surcharge rule table
//! - [`error`] - Domain error types
//! - [`validation`] - Precondition checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values are decimals, never floats
//! 4. **Explicit Errors**: Bad input is an `InvalidArgument`, never clamped
//!
//! ## Example Usage
//!
//! ```rust
//! use boxoffice_core::{compute_total_price, Money, PerformanceType, SessionSnapshot};
//!
//! // 96 of 100 cinema seats gone: the last-seats surcharge kicks in
//! let session = SessionSnapshot::new(
//!     PerformanceType::Cinema,
//!     "10.00".parse().unwrap(),
//!     100,
//!     30,
//! )
//! .with_reserved_seats(96);
//!
//! let total = compute_total_price(&session, 1).unwrap();
//! assert_eq!(total.to_string(), "11.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boxoffice_core::Money` instead of
// `use boxoffice_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{
    compute_total_price, AppliedSurcharge, PriceQuote, PricingEngine, ReservationQuote,
    SurchargeReason, UnitPrice,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fractional digits of the currency's minor unit (cents).
///
/// Prices are presented with at least this many decimals.
pub const CURRENCY_MINOR_DIGITS: u32 = 2;

/// Running time above which a performance counts as long.
///
/// ## Business Reason
/// Ballet and orchestra sessions longer than an hour carry a duration
/// surcharge. Exactly 60 minutes does not.
pub const LONG_PERFORMANCE_MINUTES: u32 = 60;
