//! # Domain Types
//!
//! Core domain types used throughout Box Office.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │  SessionSnapshot    │   │ PricingRequest  │   │ PerformanceType │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  performance_type   │   │  session        │   │  Cinema         │   │
//! │  │  base_price         │   │  quantity       │   │  Show           │   │
//! │  │  total_seats        │   └─────────────────┘   │  Ballet         │   │
//! │  │  reserved_seats     │                         │  Orchestra      │   │
//! │  │  duration_minutes   │   ┌─────────────────┐   │  Theater        │   │
//! │  └─────────────────────┘   │ SurchargeRate   │   └─────────────────┘   │
//! │                            │  bps (u32)      │                         │
//! │                            │  1000 = 10%     │                         │
//! │                            └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `SessionSnapshot` is a frozen copy of the session as the booking side
//! saw it at pricing time. Nothing here mutates it; "reserving" seats
//! produces a new snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_reservation_quantity, validate_session};

// =============================================================================
// Surcharge Rate
// =============================================================================

/// Surcharge rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%, 2000 bps = 20%
///
/// Converting bps to a decimal fraction is exact, so no float ever enters
/// the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SurchargeRate(u32);

impl SurchargeRate {
    /// Creates a surcharge rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        SurchargeRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (1000 bps → 0.1000).
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }
}

impl fmt::Display for SurchargeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.as_fraction() * Decimal::ONE_HUNDRED).normalize())
    }
}

// =============================================================================
// Performance Type
// =============================================================================

/// The category of event, which decides the surcharge tier.
///
/// Closed on purpose: every `match` on it must handle all five kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceType {
    /// Film screening.
    Cinema,
    /// Live show (concerts, stand-up).
    Show,
    /// Ballet performance.
    Ballet,
    /// Orchestra concert.
    Orchestra,
    /// Stage play.
    Theater,
}

impl PerformanceType {
    /// Every performance type, in declaration order.
    pub const ALL: [PerformanceType; 5] = [
        PerformanceType::Cinema,
        PerformanceType::Show,
        PerformanceType::Ballet,
        PerformanceType::Orchestra,
        PerformanceType::Theater,
    ];

    /// Stable lowercase name (matches the serde representation).
    pub const fn as_str(&self) -> &'static str {
        match self {
            PerformanceType::Cinema => "cinema",
            PerformanceType::Show => "show",
            PerformanceType::Ballet => "ballet",
            PerformanceType::Orchestra => "orchestra",
            PerformanceType::Theater => "theater",
        }
    }
}

impl fmt::Display for PerformanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse, e.g. `"BALLET"` or `"ballet"`.
impl FromStr for PerformanceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PerformanceType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "performance_type".to_string(),
                allowed: PerformanceType::ALL
                    .iter()
                    .map(|kind| kind.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Session Snapshot
// =============================================================================

/// A scheduled performance as seen at pricing time.
///
/// ## Invariants (checked by [`validate_session`])
/// - `total_seats > 0`
/// - `0 <= reserved_seats <= total_seats`
/// - `base_price >= 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Category deciding the surcharge tier.
    pub performance_type: PerformanceType,

    /// Ticket price before any surcharge.
    pub base_price: Money,

    /// Seats the venue sells for this session.
    pub total_seats: i64,

    /// Seats already taken.
    #[serde(default)]
    pub reserved_seats: i64,

    /// Running time in minutes.
    pub duration_minutes: u32,
}

impl SessionSnapshot {
    /// Creates a snapshot with no seats reserved yet.
    pub fn new(
        performance_type: PerformanceType,
        base_price: Money,
        total_seats: i64,
        duration_minutes: u32,
    ) -> Self {
        SessionSnapshot {
            performance_type,
            base_price,
            total_seats,
            reserved_seats: 0,
            duration_minutes,
        }
    }

    /// Sets the reserved seat count.
    pub fn with_reserved_seats(mut self, reserved_seats: i64) -> Self {
        self.reserved_seats = reserved_seats;
        self
    }

    /// Seats still free.
    #[inline]
    pub fn available_seats(&self) -> i64 {
        self.total_seats - self.reserved_seats
    }

    /// Fraction of seats not yet reserved, as an exact decimal in `[0, 1]`.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::{Money, PerformanceType, SessionSnapshot};
    /// use rust_decimal::Decimal;
    ///
    /// let session = SessionSnapshot::new(
    ///     PerformanceType::Cinema,
    ///     Money::from_minor_units(1000),
    ///     100,
    ///     30,
    /// )
    /// .with_reserved_seats(96);
    ///
    /// assert_eq!(session.available_seats_ratio().unwrap(), Decimal::new(4, 2));
    /// ```
    pub fn available_seats_ratio(&self) -> CoreResult<Decimal> {
        validate_session(self)?;
        Ok(Decimal::from(self.available_seats()) / Decimal::from(self.total_seats))
    }

    /// Checks whether `quantity` tickets still fit in this session.
    ///
    /// Non-positive quantities always fit; callers reject those separately.
    pub fn can_reserve(&self, quantity: i64) -> bool {
        quantity <= self.available_seats()
    }

    /// Returns a new snapshot with `quantity` more seats reserved.
    ///
    /// ## User Workflow
    /// ```text
    /// Reserve (qty: 3)
    ///      │
    ///      ├── qty <= 0?            → InvalidArgument
    ///      ├── qty > available?     → InsufficientSeats
    ///      │
    ///      └── OK → new snapshot, reserved_seats + 3
    /// ```
    pub fn with_reserved(&self, quantity: i64) -> CoreResult<SessionSnapshot> {
        validate_session(self)?;
        validate_reservation_quantity(quantity)?;

        if !self.can_reserve(quantity) {
            return Err(CoreError::InsufficientSeats {
                available: self.available_seats(),
                requested: quantity,
            });
        }

        Ok(SessionSnapshot {
            reserved_seats: self.reserved_seats + quantity,
            ..self.clone()
        })
    }
}

// =============================================================================
// Pricing Request
// =============================================================================

/// Request to price `quantity` tickets for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub session: SessionSnapshot,
    pub quantity: i64,
}

impl PricingRequest {
    /// Creates a new pricing request.
    pub fn new(session: SessionSnapshot, quantity: i64) -> Self {
        PricingRequest { session, quantity }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
