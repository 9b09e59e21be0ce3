//! # Pricing Engine
//!
//! Turns a session snapshot and a ticket quantity into a total price.
//!
//! ## Surcharge Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Performance      Seats left            Duration > 60 min              │
//! │  ───────────      ──────────────────    ─────────────────────────────  │
//! │  Cinema / Show    <= 5%  → +10%         (ignored)                      │
//! │  Ballet           <= 50% → +20%         base +10%, REPLACES seat tier  │
//! │  Orchestra        <= 50% → +20%         +10% of base, ADDED on top     │
//! │  Theater          (never)               (ignored)                      │
//! │                                                                         │
//! │  total = unit price × quantity                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ballet replacing and Orchestra stacking is the current rule table, not a
//! typo. Keep both until product decides otherwise.
//!
//! ## Usage
//! ```rust
//! use boxoffice_core::{Money, PerformanceType, PricingEngine, SessionSnapshot};
//!
//! let session = SessionSnapshot::new(
//!     PerformanceType::Orchestra,
//!     Money::from_minor_units(1000),
//!     10,
//!     90,
//! )
//! .with_reserved_seats(9);
//!
//! let total = PricingEngine::new().compute_total_price(&session, 1).unwrap();
//! assert_eq!(total, Money::from_minor_units(1300));
//! assert_eq!(total.to_string(), "13.00");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{PerformanceType, PricingRequest, SessionSnapshot, SurchargeRate};
use crate::validation::{validate_quantity, validate_session};
use crate::{CURRENCY_MINOR_DIGITS, LONG_PERFORMANCE_MINUTES};

// =============================================================================
// Rule Table
// =============================================================================

/// Seat ratio (in bps) at or below which cinema and shows get the surcharge.
const POPULAR_LOW_AVAILABILITY_BPS: i64 = 500;

/// Seat ratio (in bps) at or below which ballet and orchestra get the surcharge.
const CLASSICAL_LOW_AVAILABILITY_BPS: i64 = 5000;

const POPULAR_LOW_AVAILABILITY_RATE: SurchargeRate = SurchargeRate::from_bps(1000);
const CLASSICAL_LOW_AVAILABILITY_RATE: SurchargeRate = SurchargeRate::from_bps(2000);
const LONG_DURATION_RATE: SurchargeRate = SurchargeRate::from_bps(1000);

#[inline]
fn ratio_threshold(bps: i64) -> Decimal {
    Decimal::new(bps, 4)
}

// =============================================================================
// Quote Types
// =============================================================================

/// Why a surcharge was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeReason {
    /// Few seats left for this session.
    LowAvailability,
    /// The performance runs longer than an hour.
    LongDuration,
}

/// One surcharge that contributed to the unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedSurcharge {
    pub reason: SurchargeReason,
    pub rate: SurchargeRate,
    /// `rate` percent of the base price.
    pub amount: Money,
}

impl AppliedSurcharge {
    fn on_base(reason: SurchargeReason, rate: SurchargeRate, base: Money) -> CoreResult<Self> {
        let amount = base.percent_of(rate).ok_or_else(unrepresentable_surcharge)?;
        Ok(AppliedSurcharge {
            reason,
            rate,
            amount: amount.to_minor_scale(CURRENCY_MINOR_DIGITS),
        })
    }
}

/// Unit price of a session, with the surcharges that shaped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPrice {
    pub price: Money,
    pub available_seats_ratio: Decimal,
    pub surcharges: Vec<AppliedSurcharge>,
}

/// Fully priced request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub performance_type: PerformanceType,
    pub unit_price: Money,
    pub quantity: i64,
    pub total_price: Money,
    pub available_seats_ratio: Decimal,
    pub surcharges: Vec<AppliedSurcharge>,
}

/// Price of a reservation plus the session as it looks afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationQuote {
    pub quote: PriceQuote,
    pub session_after: SessionSnapshot,
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Stateless ticket pricing.
///
/// ## Thread Safety
/// Holds no state, so one instance (or many) can be shared across threads
/// freely. Seat bookkeeping is the caller's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    /// Creates a pricing engine.
    pub const fn new() -> Self {
        PricingEngine
    }

    /// Prices `quantity` tickets for `session`.
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` when `quantity <= 0`, the session
    /// breaks its invariants, or the price cannot be held exactly in a
    /// `Decimal`. Nothing is clamped or rounded.
    ///
    /// ## User Workflow
    /// ```text
    /// Booking form: 2 tickets
    ///      │
    ///      ▼
    /// compute_total_price(session, 2) ← THIS FUNCTION
    ///      │
    ///      ├── validate quantity + session
    ///      ├── unit price (surcharge tier)
    ///      └── unit price × 2
    ///      │
    ///      ▼
    /// Checkout amount
    /// ```
    pub fn compute_total_price(&self, session: &SessionSnapshot, quantity: i64) -> CoreResult<Money> {
        validate_quantity(quantity)?;
        let unit = self.unit_price(session)?;
        total_for(unit.price, quantity)
    }

    /// Derives the unit price of one ticket, before quantity.
    pub fn unit_price(&self, session: &SessionSnapshot) -> CoreResult<UnitPrice> {
        validate_session(session)?;
        let ratio = session.available_seats_ratio()?;
        let (price, surcharges) = derive_unit_price(session, ratio)?;

        Ok(UnitPrice {
            price: price.to_minor_scale(CURRENCY_MINOR_DIGITS),
            available_seats_ratio: ratio,
            surcharges,
        })
    }

    /// Prices a request and explains the result.
    pub fn quote(&self, request: &PricingRequest) -> CoreResult<PriceQuote> {
        validate_quantity(request.quantity)?;
        let unit = self.unit_price(&request.session)?;
        let total_price = total_for(unit.price, request.quantity)?;

        Ok(PriceQuote {
            performance_type: request.session.performance_type,
            unit_price: unit.price,
            quantity: request.quantity,
            total_price,
            available_seats_ratio: unit.available_seats_ratio,
            surcharges: unit.surcharges,
        })
    }

    /// Prices a reservation against the session as it stands now, then
    /// takes the seats.
    ///
    /// ## Errors
    /// - `InvalidArgument` for a non-positive quantity or broken session
    /// - `InsufficientSeats` when fewer than `quantity` seats are free
    pub fn quote_reservation(
        &self,
        session: &SessionSnapshot,
        quantity: i64,
    ) -> CoreResult<ReservationQuote> {
        let session_after = session.with_reserved(quantity)?;
        let quote = self.quote(&PricingRequest::new(session.clone(), quantity))?;

        Ok(ReservationQuote {
            quote,
            session_after,
        })
    }
}

/// Prices `quantity` tickets for `session` with a default engine.
pub fn compute_total_price(session: &SessionSnapshot, quantity: i64) -> CoreResult<Money> {
    PricingEngine::new().compute_total_price(session, quantity)
}

fn total_for(unit_price: Money, quantity: i64) -> CoreResult<Money> {
    unit_price
        .checked_mul_quantity(quantity)
        .map(|total| total.to_minor_scale(CURRENCY_MINOR_DIGITS))
        .ok_or_else(|| {
            CoreError::InvalidArgument(ValidationError::InvalidFormat {
                field: "quantity".to_string(),
                reason: format!("total for {quantity} tickets exceeds the representable range"),
            })
        })
}

fn unrepresentable_surcharge() -> CoreError {
    CoreError::InvalidArgument(ValidationError::InvalidFormat {
        field: "base_price".to_string(),
        reason: "surcharged price exceeds the representable range or precision".to_string(),
    })
}

/// Applies the rule table. Inputs are already validated.
fn derive_unit_price(
    session: &SessionSnapshot,
    ratio: Decimal,
) -> CoreResult<(Money, Vec<AppliedSurcharge>)> {
    let base = session.base_price;
    let long_running = session.duration_minutes > LONG_PERFORMANCE_MINUTES;
    let mut surcharges = Vec::new();

    let price = match session.performance_type {
        PerformanceType::Cinema | PerformanceType::Show => low_availability(
            base,
            ratio,
            POPULAR_LOW_AVAILABILITY_BPS,
            POPULAR_LOW_AVAILABILITY_RATE,
            &mut surcharges,
        )?,
        // Long ballet is priced from base alone: the seat tier would be
        // overwritten, so it is never computed.
        PerformanceType::Ballet if long_running => {
            surcharges.push(AppliedSurcharge::on_base(
                SurchargeReason::LongDuration,
                LONG_DURATION_RATE,
                base,
            )?);
            base.apply_surcharge(LONG_DURATION_RATE)
                .ok_or_else(unrepresentable_surcharge)?
        }
        PerformanceType::Ballet => low_availability(
            base,
            ratio,
            CLASSICAL_LOW_AVAILABILITY_BPS,
            CLASSICAL_LOW_AVAILABILITY_RATE,
            &mut surcharges,
        )?,
        PerformanceType::Orchestra => {
            let mut price = low_availability(
                base,
                ratio,
                CLASSICAL_LOW_AVAILABILITY_BPS,
                CLASSICAL_LOW_AVAILABILITY_RATE,
                &mut surcharges,
            )?;
            if long_running {
                let surcharge =
                    AppliedSurcharge::on_base(SurchargeReason::LongDuration, LONG_DURATION_RATE, base)?;
                price = price
                    .checked_add(surcharge.amount)
                    .ok_or_else(unrepresentable_surcharge)?;
                surcharges.push(surcharge);
            }
            price
        }
        PerformanceType::Theater => base,
    };

    Ok((price, surcharges))
}

fn low_availability(
    base: Money,
    ratio: Decimal,
    threshold_bps: i64,
    rate: SurchargeRate,
    surcharges: &mut Vec<AppliedSurcharge>,
) -> CoreResult<Money> {
    if ratio <= ratio_threshold(threshold_bps) {
        surcharges.push(AppliedSurcharge::on_base(
            SurchargeReason::LowAvailability,
            rate,
            base,
        )?);
        base.apply_surcharge(rate).ok_or_else(unrepresentable_surcharge)
    } else {
        Ok(base)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn session(kind: PerformanceType, total: i64, reserved: i64, duration: u32) -> SessionSnapshot {
        SessionSnapshot::new(kind, Money::from_minor_units(1000), total, duration)
            .with_reserved_seats(reserved)
    }

    fn total(session: &SessionSnapshot, quantity: i64) -> Decimal {
        compute_total_price(session, quantity).unwrap().amount()
    }

    // -------------------------------------------------------------------------
    // Calibration scenarios (base price 10.00)
    // -------------------------------------------------------------------------

    #[test]
    fn test_theater_never_surcharged() {
        let s = session(PerformanceType::Theater, 5, 0, 90);
        assert_eq!(total(&s, 3), dec!(30.00));
    }

    #[test]
    fn test_cinema_nearly_sold_out() {
        let s = session(PerformanceType::Cinema, 100, 96, 30);
        assert_eq!(total(&s, 1), dec!(11.00));
    }

    #[test]
    fn test_ballet_long_duration_replaces_seat_surcharge() {
        let s = session(PerformanceType::Ballet, 10, 9, 90);
        assert_eq!(total(&s, 1), dec!(11.00));
    }

    #[test]
    fn test_orchestra_long_duration_stacks_on_seat_surcharge() {
        let s = session(PerformanceType::Orchestra, 10, 9, 90);
        assert_eq!(total(&s, 1), dec!(13.00));
    }

    #[test]
    fn test_cinema_half_full_not_surcharged() {
        let s = session(PerformanceType::Cinema, 100, 50, 30);
        assert_eq!(total(&s, 2), dec!(20.00));
    }

    // -------------------------------------------------------------------------
    // Tier boundaries
    // -------------------------------------------------------------------------

    #[test]
    fn test_show_surcharge_applies_at_exactly_five_percent() {
        let at = session(PerformanceType::Show, 100, 95, 30);
        assert_eq!(total(&at, 1), dec!(11.00));

        let above = session(PerformanceType::Show, 100, 94, 30);
        assert_eq!(total(&above, 1), dec!(10.00));
    }

    #[test]
    fn test_classical_surcharge_applies_at_exactly_half() {
        let ballet = session(PerformanceType::Ballet, 10, 5, 60);
        assert_eq!(total(&ballet, 1), dec!(12.00));

        let orchestra = session(PerformanceType::Orchestra, 10, 5, 60);
        assert_eq!(total(&orchestra, 1), dec!(12.00));

        let ballet = session(PerformanceType::Ballet, 10, 4, 60);
        assert_eq!(total(&ballet, 1), dec!(10.00));

        let orchestra = session(PerformanceType::Orchestra, 10, 4, 60);
        assert_eq!(total(&orchestra, 1), dec!(10.00));
    }

    #[test]
    fn test_sixty_minutes_is_not_long() {
        let ballet = session(PerformanceType::Ballet, 10, 0, 60);
        assert_eq!(total(&ballet, 1), dec!(10.00));

        let ballet = session(PerformanceType::Ballet, 10, 0, 61);
        assert_eq!(total(&ballet, 1), dec!(11.00));
    }

    #[test]
    fn test_orchestra_long_duration_with_plenty_of_seats() {
        let s = session(PerformanceType::Orchestra, 10, 0, 120);
        assert_eq!(total(&s, 2), dec!(22.00));
    }

    #[test]
    fn test_sold_out_cinema_still_priceable() {
        let s = session(PerformanceType::Cinema, 40, 40, 100);
        assert_eq!(total(&s, 1), dec!(11.00));
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    #[test]
    fn test_zero_quantity_is_invalid_argument() {
        let s = session(PerformanceType::Theater, 5, 0, 90);
        let err = compute_total_price(&s, 0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(compute_total_price(&s, -2).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_zero_seats_is_invalid_argument() {
        let s = session(PerformanceType::Cinema, 0, 0, 90);
        assert_eq!(
            compute_total_price(&s, 1),
            Err(CoreError::InvalidArgument(ValidationError::MustBePositive {
                field: "total_seats".to_string()
            }))
        );
    }

    #[test]
    fn test_reserved_out_of_range_is_invalid_argument() {
        let over = session(PerformanceType::Cinema, 10, 11, 90);
        assert!(compute_total_price(&over, 1).unwrap_err().is_invalid_argument());

        let negative = session(PerformanceType::Cinema, 10, -1, 90);
        assert!(compute_total_price(&negative, 1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_overflowing_total_is_invalid_argument() {
        let s = SessionSnapshot::new(
            PerformanceType::Theater,
            Money::from_decimal(Decimal::MAX),
            1,
            10,
        );
        assert!(compute_total_price(&s, 2).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_overflowing_surcharge_is_invalid_argument() {
        let huge = Money::from_decimal(Decimal::MAX);
        for kind in [PerformanceType::Cinema, PerformanceType::Ballet, PerformanceType::Orchestra] {
            let s = SessionSnapshot::new(kind, huge, 1, 90).with_reserved_seats(1);
            let err = compute_total_price(&s, 1).unwrap_err();
            assert!(err.is_invalid_argument(), "{kind}: {err:?}");
        }

        // 6.5e28 + 20% fits, adding another 10% of base does not
        let s = SessionSnapshot::new(
            PerformanceType::Orchestra,
            Money::from_decimal(dec!(65000000000000000000000000000)),
            10,
            90,
        )
        .with_reserved_seats(9);
        assert!(compute_total_price(&s, 1).unwrap_err().is_invalid_argument());

        // Theater never surcharges, so the largest base price is still fine
        let s = SessionSnapshot::new(PerformanceType::Theater, huge, 1, 90);
        assert_eq!(compute_total_price(&s, 1), Ok(huge));
    }

    #[test]
    fn test_surcharge_needing_rounding_is_invalid_argument() {
        let s = SessionSnapshot::new(
            PerformanceType::Cinema,
            Money::from_decimal(dec!(0.1234567890123456789012345678)),
            20,
            30,
        )
        .with_reserved_seats(20);
        assert_eq!(
            compute_total_price(&s, 1),
            Err(CoreError::InvalidArgument(ValidationError::InvalidFormat {
                field: "base_price".to_string(),
                reason: "surcharged price exceeds the representable range or precision".to_string(),
            }))
        );
    }

    // -------------------------------------------------------------------------
    // Quotes
    // -------------------------------------------------------------------------

    #[test]
    fn test_quote_explains_orchestra_price() {
        let request = PricingRequest::new(session(PerformanceType::Orchestra, 10, 9, 90), 2);
        let quote = PricingEngine::new().quote(&request).unwrap();

        assert_eq!(quote.unit_price.amount(), dec!(13.00));
        assert_eq!(quote.total_price.amount(), dec!(26.00));
        assert_eq!(quote.available_seats_ratio, dec!(0.1));
        assert_eq!(
            quote
                .surcharges
                .iter()
                .map(|s| s.reason)
                .collect::<Vec<_>>(),
            vec![SurchargeReason::LowAvailability, SurchargeReason::LongDuration]
        );
        assert_eq!(quote.surcharges[0].amount.amount(), dec!(2));
        assert_eq!(quote.surcharges[1].amount.amount(), dec!(1));
    }

    #[test]
    fn test_quote_ballet_lists_only_long_duration() {
        let request = PricingRequest::new(session(PerformanceType::Ballet, 10, 9, 90), 1);
        let quote = PricingEngine::new().quote(&request).unwrap();

        assert_eq!(quote.surcharges.len(), 1);
        assert_eq!(quote.surcharges[0].reason, SurchargeReason::LongDuration);
        assert_eq!(quote.surcharges[0].rate, SurchargeRate::from_bps(1000));
    }

    #[test]
    fn test_totals_scaled_to_minor_units() {
        let s = SessionSnapshot::new(
            PerformanceType::Theater,
            Money::from_decimal(dec!(10)),
            5,
            90,
        );
        let price = compute_total_price(&s, 3).unwrap();
        assert_eq!(price.to_string(), "30.00");
        assert_eq!(price.amount().scale(), 2);
    }

    #[test]
    fn test_sub_cent_surcharge_digits_are_kept() {
        let s = SessionSnapshot::new(
            PerformanceType::Cinema,
            Money::from_minor_units(1099),
            100,
            30,
        )
        .with_reserved_seats(100);
        // 10.99 + 1.099
        assert_eq!(total(&s, 1), dec!(12.089));
    }

    #[test]
    fn test_quote_reservation_prices_before_taking_seats() {
        // 60% free before, 50% after: the surcharge must not apply
        let s = session(PerformanceType::Ballet, 10, 4, 45);
        let reservation = PricingEngine::new().quote_reservation(&s, 1).unwrap();

        assert_eq!(reservation.quote.total_price.amount(), dec!(10.00));
        assert_eq!(reservation.session_after.reserved_seats, 5);
        assert_eq!(s.reserved_seats, 4);
    }

    #[test]
    fn test_quote_reservation_leaves_remaining_seats() {
        let s = session(PerformanceType::Theater, 5, 0, 90);
        let reservation = PricingEngine::new().quote_reservation(&s, 3).unwrap();

        assert_eq!(reservation.quote.total_price.amount(), dec!(30.00));
        assert_eq!(reservation.session_after.available_seats(), 2);
    }

    #[test]
    fn test_quote_reservation_rejects_overbooking() {
        let s = session(PerformanceType::Theater, 3, 0, 90);
        let err = PricingEngine::new().quote_reservation(&s, 5).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientSeats { available: 3, requested: 5 }));

        let err = PricingEngine::new().quote_reservation(&s, 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_quote_serializes_decimals_as_strings() {
        let request = PricingRequest::new(session(PerformanceType::Cinema, 100, 96, 30), 1);
        let quote = PricingEngine::new().quote(&request).unwrap();
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["performance_type"], "cinema");
        assert_eq!(json["total_price"], "11.00");
        assert_eq!(json["surcharges"][0]["reason"], "low_availability");
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingEngine>();

        let engine = PricingEngine::new();
        let s = session(PerformanceType::Orchestra, 10, 9, 90);
        let (engine, s) = (&engine, &s);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (1..=4)
                .map(|qty| scope.spawn(move || engine.compute_total_price(s, qty)))
                .collect();
            for (qty, handle) in (1..=4).zip(handles) {
                let price = handle.join().unwrap().unwrap();
                assert_eq!(price.amount(), dec!(13.00) * Decimal::from(qty));
            }
        });
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    fn linear_kind() -> impl Strategy<Value = PerformanceType> {
        prop_oneof![
            Just(PerformanceType::Cinema),
            Just(PerformanceType::Show),
            Just(PerformanceType::Theater),
        ]
    }

    fn any_session(kind: impl Strategy<Value = PerformanceType>) -> impl Strategy<Value = SessionSnapshot> {
        (kind, 0i64..1_000_000, 1i64..2_000, 0u32..300)
            .prop_flat_map(|(kind, cents, total, duration)| {
                (0..=total).prop_map(move |reserved| {
                    SessionSnapshot::new(kind, Money::from_minor_units(cents), total, duration)
                        .with_reserved_seats(reserved)
                })
            })
    }

    proptest! {
        #[test]
        fn prop_total_is_linear_in_quantity(s in any_session(linear_kind()), qty in 1i64..500) {
            let one = compute_total_price(&s, 1).unwrap();
            let many = compute_total_price(&s, qty).unwrap();
            prop_assert_eq!(Some(many), one.checked_mul_quantity(qty));
        }

        #[test]
        fn prop_theater_is_base_times_quantity(
            s in any_session(Just(PerformanceType::Theater)),
            qty in 1i64..500
        ) {
            prop_assert_eq!(
                Some(compute_total_price(&s, qty).unwrap()),
                s.base_price.checked_mul_quantity(qty)
            );
        }

        #[test]
        fn prop_long_ballet_is_base_plus_ten_percent(
            s in any_session(Just(PerformanceType::Ballet))
        ) {
            prop_assume!(s.duration_minutes > LONG_PERFORMANCE_MINUTES);
            let unit = PricingEngine::new().unit_price(&s).unwrap();
            prop_assert_eq!(unit.price.amount(), s.base_price.amount() * dec!(1.10));
        }

        #[test]
        fn prop_scarce_long_orchestra_is_base_plus_thirty_percent(
            s in any_session(Just(PerformanceType::Orchestra))
        ) {
            prop_assume!(s.duration_minutes > LONG_PERFORMANCE_MINUTES);
            prop_assume!(s.available_seats_ratio().unwrap() <= dec!(0.50));
            let unit = PricingEngine::new().unit_price(&s).unwrap();
            prop_assert_eq!(unit.price.amount(), s.base_price.amount() * dec!(1.30));
        }

        #[test]
        fn prop_price_never_below_base(s in any_session(any::<u8>().prop_map(|i| PerformanceType::ALL[i as usize % 5]))) {
            let unit = PricingEngine::new().unit_price(&s).unwrap();
            prop_assert!(unit.price >= s.base_price);
        }
    }
}
