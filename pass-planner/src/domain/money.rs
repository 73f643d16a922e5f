//! Cash amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a decimal amount cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount: {reason}")]
pub struct InvalidAmount {
    reason: &'static str,
}

/// Largest amount a catalog may state: one billion currency units.
const MAX_DECIMAL_CENTS: u64 = 100_000_000_000;

/// A non-negative amount of money in hundredths of the currency unit.
///
/// Catalogs write amounts as decimals (`4.60`); they are rounded to the
/// nearest hundredth on the way in so sums over a year of trips stay exact.
/// Addition and repetition saturate at the largest representable amount.
///
/// # Examples
///
/// ```
/// use pass_planner::domain::Money;
///
/// let fare = Money::from_decimal(4.60).unwrap();
/// assert_eq!(fare.cents(), 460);
/// assert_eq!((fare * 584).to_string(), "2686.40");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    /// Build an amount from hundredths.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build an amount from whole currency units.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Convert a decimal amount, rounding to the nearest hundredth.
    ///
    /// Amounts above one billion units are rejected.
    pub fn from_decimal(amount: f64) -> Result<Self, InvalidAmount> {
        if !amount.is_finite() {
            return Err(InvalidAmount {
                reason: "must be a finite number",
            });
        }
        if amount < 0.0 {
            return Err(InvalidAmount {
                reason: "must not be negative",
            });
        }
        let cents = (amount * 100.0).round();
        if cents > MAX_DECIMAL_CENTS as f64 {
            return Err(InvalidAmount {
                reason: "exceeds one billion",
            });
        }
        Ok(Self(cents as u64))
    }

    /// Returns the amount in hundredths.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount as a decimal, for display and serialization only.
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by a factor in `0..=1`, rounding to the nearest hundredth.
    pub fn scale(self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as u64)
    }

    /// Subtract, stopping at zero.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Repeat an amount `count` times (a fare over a year of trips).
impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({self})")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Self::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_rounding() {
        assert_eq!(Money::from_decimal(4.60).unwrap().cents(), 460);
        assert_eq!(Money::from_decimal(11.2).unwrap().cents(), 1120);
        assert_eq!(Money::from_decimal(1922.0).unwrap(), Money::from_units(1922));
        assert_eq!(Money::from_decimal(0.005).unwrap().cents(), 1);
    }

    #[test]
    fn rejects_bad_decimals() {
        assert!(Money::from_decimal(-0.01).is_err());
        assert!(Money::from_decimal(f64::NAN).is_err());
        assert!(Money::from_decimal(f64::INFINITY).is_err());
        assert_eq!(
            Money::from_decimal(-1.0).unwrap_err().to_string(),
            "invalid amount: must not be negative"
        );
    }

    #[test]
    fn arithmetic() {
        let fare = Money::from_cents(460);
        assert_eq!(fare * 584, Money::from_cents(268_640));
        assert_eq!(fare + fare, Money::from_cents(920));
        assert_eq!(fare.scale(0.5), Money::from_cents(230));
        assert_eq!(Money::from_cents(1780).scale(0.5), Money::from_cents(890));
        assert_eq!(fare.saturating_sub(Money::from_units(10)), Money::ZERO);

        let total: Money = [fare, fare, Money::from_units(1)].into_iter().sum();
        assert_eq!(total, Money::from_cents(1020));
    }

    #[test]
    fn rejects_amounts_beyond_a_billion() {
        assert_eq!(
            Money::from_decimal(1_000_000_000.0).unwrap(),
            Money::from_units(1_000_000_000)
        );
        assert_eq!(
            Money::from_decimal(1e16).unwrap_err().to_string(),
            "invalid amount: exceeds one billion"
        );
        assert!(serde_json::from_str::<Money>("1e16").is_err());
    }

    #[test]
    fn arithmetic_saturates() {
        let huge = Money::from_cents(u64::MAX / 2);
        assert_eq!(huge * 4000, Money::from_cents(u64::MAX));
        assert_eq!(huge + huge + huge, Money::from_cents(u64::MAX));

        let mut total = huge;
        total += huge;
        total += huge;
        assert_eq!(total, Money::from_cents(u64::MAX));
        assert_eq!(Money::from_units(u64::MAX), Money::from_cents(u64::MAX));
    }

    #[test]
    fn display() {
        assert_eq!(Money::from_cents(268_640).to_string(), "2686.40");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(format!("{:?}", Money::from_cents(460)), "Money(4.60)");
    }

    #[test]
    fn serde_decimal() {
        let m: Money = serde_json::from_str("4.6").unwrap();
        assert_eq!(m, Money::from_cents(460));
        let m: Money = serde_json::from_str("586").unwrap();
        assert_eq!(m, Money::from_units(586));
        assert_eq!(serde_json::to_string(&Money::from_cents(460)).unwrap(), "4.6");
        assert!(serde_json::from_str::<Money>("-3").is_err());
    }
}
