//! Subscription products and what they grant.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Money, TimeOfDay, TimeWindow, ZoneSpec};

/// A pricing tier key selecting which price and credit apply.
///
/// The Zurich tariff keys brackets by age (24, 25, 26).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeBracket(pub u16);

impl fmt::Debug for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgeBracket({})", self.0)
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned for a discount rate outside `(0, 1]`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid discount rate {rate}: must be in (0, 1]")]
pub struct InvalidDiscountRate {
    rate: f64,
}

/// A multiplier on the full fare, in `(0, 1]`.
///
/// ```
/// use pass_planner::domain::DiscountRate;
///
/// assert_eq!(DiscountRate::new(0.5).unwrap().get(), 0.5);
/// assert!(DiscountRate::new(0.0).is_err());
/// assert!(DiscountRate::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Full fare, no discount.
    pub const NONE: Self = Self(1.0);

    pub fn new(rate: f64) -> Result<Self, InvalidDiscountRate> {
        if rate > 0.0 && rate <= 1.0 {
            Ok(Self(rate))
        } else {
            Err(InvalidDiscountRate { rate })
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    /// Apply the rate to a full fare.
    pub fn apply(&self, full_price: Money) -> Money {
        full_price.scale(self.0)
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = InvalidDiscountRate;

    fn try_from(rate: f64) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

/// What owning a product grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Coverage {
    /// No travel benefit.
    None,
    /// Full fares are multiplied by `rate`.
    Discount { rate: DiscountRate },
    /// Free travel within `zones` while departing inside `window`.
    Unlimited {
        zones: ZoneSpec,
        #[serde(default, alias = "times")]
        window: TimeWindow,
    },
}

impl Coverage {
    /// Returns the zones and window of an unlimited pass.
    pub fn as_unlimited(&self) -> Option<(&ZoneSpec, &TimeWindow)> {
        match self {
            Coverage::Unlimited { zones, window } => Some((zones, window)),
            _ => None,
        }
    }

    /// Returns the zones of an unlimited pass valid at `departure`.
    pub fn unlimited_at(&self, departure: TimeOfDay) -> Option<&ZoneSpec> {
        self.as_unlimited()
            .filter(|(_, window)| window.contains(departure))
            .map(|(zones, _)| zones)
    }

    /// Returns the rate of a discount product.
    pub fn discount_rate(&self) -> Option<DiscountRate> {
        match self {
            Coverage::Discount { rate } => Some(*rate),
            _ => None,
        }
    }
}

/// A purchasable subscription: season pass, discount card or wallet.
///
/// `price` lists every bracket the product is sold to; a bracket missing
/// from it makes the product ineligible for that bracket. `credit` is a
/// prepaid amount counted against single-ticket spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionProduct {
    pub name: String,
    pub price: BTreeMap<AgeBracket, Money>,
    pub coverage: Coverage,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub credit: BTreeMap<AgeBracket, Money>,
}

impl SubscriptionProduct {
    /// Create a product without credit.
    pub fn new(
        name: impl Into<String>,
        price: impl IntoIterator<Item = (AgeBracket, Money)>,
        coverage: Coverage,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into_iter().collect(),
            coverage,
            credit: BTreeMap::new(),
        }
    }

    /// Attach per-bracket credit.
    pub fn with_credit(mut self, credit: impl IntoIterator<Item = (AgeBracket, Money)>) -> Self {
        self.credit = credit.into_iter().collect();
        self
    }

    /// Price for a bracket, or `None` if the product is not sold to it.
    pub fn price_for(&self, age: AgeBracket) -> Option<Money> {
        self.price.get(&age).copied()
    }

    /// Credit for a bracket, zero if none is granted.
    pub fn credit_for(&self, age: AgeBracket) -> Money {
        self.credit.get(&age).copied().unwrap_or(Money::ZERO)
    }

    pub fn is_eligible(&self, age: AgeBracket) -> bool {
        self.price.contains_key(&age)
    }
}
