//! # Money Module
//!
//! Provides the `Money` type for handling ticket prices safely.
//!
//! ## Why Exact Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    10.00 × 0.10 = 1.0000000000000002  ❌ WRONG!                         │
//! │                                                                         │
//! │  Surcharges chain (20% then +10% of base), so drift compounds.          │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    10.00 × 0.1000 = 1.000000 exactly                                    │
//! │    A result that would need rounding is refused, not rounded            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boxoffice_core::money::Money;
//!
//! // Create from minor units (cents)
//! let price = Money::from_minor_units(1099); // 10.99
//!
//! // Or parse an exact decimal string
//! let parsed: Money = "10.99".parse().unwrap();
//! assert_eq!(price, parsed);
//!
//! // Arithmetic is checked: `None` instead of a panic or a rounded digit
//! let doubled = price.checked_mul_quantity(2).unwrap();          // 21.98
//! let total = price.checked_add(Money::from_minor_units(500));   // 15.99
//! assert_eq!(doubled.to_string(), "21.98");
//! assert_eq!(total.unwrap().to_string(), "15.99");
//!
//! // NEVER do this:
//! // let bad = Money::from_f64(10.99); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::SurchargeRate;
use crate::CURRENCY_MINOR_DIGITS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal, not cents**: percentage surcharges produce sub-cent digits,
///   and those are kept rather than rounded mid-chain
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Serde transparent**: serializes as a decimal string (`"11.00"`)
///
/// ## Where Money is Used
/// ```text
/// SessionSnapshot.base_price ──► unit price (after surcharges)
///                                     │
///                                     ▼
///                         unit price × quantity ──► total price
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from minor units (cents for 2-digit currencies).
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::money::Money;
    ///
    /// let price = Money::from_minor_units(1000);
    /// assert_eq!(price.to_string(), "10.00");
    /// ```
    #[inline]
    pub fn from_minor_units(units: i64) -> Self {
        Money(Decimal::new(units, CURRENCY_MINOR_DIGITS))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns `rate` percent of this amount, exactly.
    ///
    /// `None` when the exact result does not fit in a `Decimal`, either
    /// because it is too large or because it needs more than 28 fractional
    /// digits. `Decimal` would round in the latter case.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::money::Money;
    /// use boxoffice_core::types::SurchargeRate;
    ///
    /// let base = Money::from_minor_units(1000);
    /// let share = base.percent_of(SurchargeRate::from_bps(1000)); // 10%
    /// assert_eq!(share, Some(Money::from_minor_units(100)));
    /// ```
    pub fn percent_of(&self, rate: SurchargeRate) -> Option<Money> {
        exact_mul(self.0, rate.as_fraction()).map(Money)
    }

    /// Applies a percentage surcharge: `base + base × rate`.
    ///
    /// Same `None` conditions as [`Money::percent_of`], applied to the sum
    /// as well.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::money::Money;
    /// use boxoffice_core::types::SurchargeRate;
    ///
    /// let base = Money::from_minor_units(1000);            // 10.00
    /// let raised = base.apply_surcharge(SurchargeRate::from_bps(2000)); // +20%
    /// assert_eq!(raised, Some(Money::from_minor_units(1200)));   // 12.00
    /// ```
    pub fn apply_surcharge(&self, rate: SurchargeRate) -> Option<Money> {
        self.percent_of(rate)
            .and_then(|share| self.checked_add(share))
    }

    /// Adds two amounts, returning `None` unless the sum is exact.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        exact_add(self.0, other.0).map(Money)
    }

    /// Multiplies money by a quantity, returning `None` on overflow or when
    /// the product would have to be rounded.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::money::Money;
    ///
    /// let unit_price = Money::from_minor_units(1100);
    /// let total = unit_price.checked_mul_quantity(3).unwrap();
    /// assert_eq!(total, Money::from_minor_units(3300));
    /// ```
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Money> {
        exact_mul(self.0, Decimal::from(qty)).map(Money)
    }

    /// Presents the amount with at least `decimals` fractional digits.
    ///
    /// Trailing zeros beyond `decimals` are dropped, significant digits
    /// never are: `11.000000` becomes `11.00`, `12.089000` becomes `12.089`
    /// and `11` becomes `11.00`. The value itself is unchanged.
    pub fn to_minor_scale(&self, decimals: u32) -> Money {
        let mut amount = self.0.normalize();
        if amount.scale() < decimals {
            amount.rescale(decimals);
        }
        Money(amount)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with at least the currency's minor-unit digits.
///
/// ## Note
/// No currency symbol, no grouping. Localised formatting belongs to the
/// presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_minor_scale(CURRENCY_MINOR_DIGITS).0)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Money)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

// =============================================================================
// Exact Arithmetic
// =============================================================================

// `Decimal` silently rounds once a result needs more than 28 fractional
// digits or 96 bits of mantissa. These helpers redo the operation on the raw
// mantissas and only accept results that match exactly.

fn exact_mul(a: Decimal, b: Decimal) -> Option<Decimal> {
    let product = a.checked_mul(b)?;
    let exact = a.mantissa().checked_mul(b.mantissa());
    holds_exactly(product, exact, a.scale() + b.scale()).then_some(product)
}

fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    let sum = a.checked_add(b)?;
    let scale = a.scale().max(b.scale());
    let exact = shift_left(a.mantissa(), scale - a.scale())
        .zip(shift_left(b.mantissa(), scale - b.scale()))
        .and_then(|(x, y)| x.checked_add(y));
    holds_exactly(sum, exact, scale).then_some(sum)
}

/// True when `result` equals `mantissa × 10^-scale`.
fn holds_exactly(result: Decimal, mantissa: Option<i128>, scale: u32) -> bool {
    let Some(mantissa) = mantissa else {
        return false;
    };
    let (lhs, rhs) = if result.scale() <= scale {
        (shift_left(result.mantissa(), scale - result.scale()), Some(mantissa))
    } else {
        (Some(result.mantissa()), shift_left(mantissa, result.scale() - scale))
    };
    lhs.is_some() && lhs == rhs
}

fn shift_left(mantissa: i128, digits: u32) -> Option<i128> {
    10i128
        .checked_pow(digits)
        .and_then(|factor| mantissa.checked_mul(factor))
}

// =============================================================================
// Unit Tests
// =============================================================================
