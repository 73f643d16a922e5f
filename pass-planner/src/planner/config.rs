//! Tariff configuration for the planner.

use serde::{Deserialize, Serialize};

use crate::domain::{Money, ZoneId};

/// Extension ticket prices, by number of uncovered zone units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionPrices {
    /// 1-2 uncovered units.
    pub one_two: Money,

    /// 1-2 uncovered units while the flat-rate discount card is owned.
    pub one_two_discounted: Money,

    /// Exactly 3 uncovered units.
    pub three: Money,

    /// 4 or more uncovered units.
    pub four_plus: Money,
}

impl ExtensionPrices {
    /// Price of the extension tier for `units` missing zone units.
    pub fn for_units(&self, units: u32, discounted: bool) -> Money {
        match units {
            0..=2 if discounted => self.one_two_discounted,
            0..=2 => self.one_two,
            3 => self.three,
            _ => self.four_plus,
        }
    }
}

impl Default for ExtensionPrices {
    fn default() -> Self {
        Self {
            one_two: Money::from_cents(460),
            one_two_discounted: Money::from_cents(640),
            three: Money::from_cents(700),
            four_plus: Money::from_cents(920),
        }
    }
}

/// A product family that may only be bought on top of a base product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDependency {
    /// Products whose name starts with this prefix are dependent tiers.
    pub prefix: String,

    /// Name of the product every dependent tier requires.
    pub base: String,
}

impl TierDependency {
    pub fn new(prefix: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            base: base.into(),
        }
    }

    /// Returns true if `name` belongs to this dependent family.
    pub fn applies_to(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }
}

/// Tariff rules that vary by fare network.
///
/// `Default` is the Zurich network: home zone 110 counts double because a
/// trip through it needs a return-priced extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffConfig {
    /// Zone whose absence from owned passes counts extra.
    pub home_zone: ZoneId,

    /// Missing units charged for the home zone.
    pub home_zone_weight: u32,

    /// Extension ticket tier prices.
    pub extension: ExtensionPrices,

    /// Discount card that switches the 1-2 unit tier to its discounted price.
    pub flat_rate_discount: String,

    /// Dependent product families and their base products.
    pub tier_dependencies: Vec<TierDependency>,

    /// Catalog entry standing for "no subscription"; never enumerated.
    pub placeholder: String,
}

impl TariffConfig {
    /// Missing units for one uncovered zone.
    pub fn zone_weight(&self, zone: ZoneId) -> u32 {
        if zone == self.home_zone {
            self.home_zone_weight
        } else {
            1
        }
    }
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            home_zone: ZoneId(110),
            home_zone_weight: 2,
            extension: ExtensionPrices::default(),
            flat_rate_discount: "halbtax".to_string(),
            tier_dependencies: vec![TierDependency::new("halbtax_plus", "halbtax")],
            placeholder: "no_sub".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TariffConfig::default();

        assert_eq!(config.home_zone, ZoneId(110));
        assert_eq!(config.home_zone_weight, 2);
        assert_eq!(config.flat_rate_discount, "halbtax");
        assert_eq!(config.placeholder, "no_sub");
        assert_eq!(config.tier_dependencies.len(), 1);
        assert_eq!(config.extension.one_two, Money::from_cents(460));
    }

    #[test]
    fn zone_weights() {
        let config = TariffConfig::default();
        assert_eq!(config.zone_weight(ZoneId(110)), 2);
        assert_eq!(config.zone_weight(ZoneId(141)), 1);
    }

    #[test]
    fn extension_tiers() {
        let prices = ExtensionPrices::default();
        assert_eq!(prices.for_units(1, false), Money::from_cents(460));
        assert_eq!(prices.for_units(2, false), Money::from_cents(460));
        assert_eq!(prices.for_units(2, true), Money::from_cents(640));
        assert_eq!(prices.for_units(3, true), Money::from_cents(700));
        assert_eq!(prices.for_units(4, false), Money::from_cents(920));
        assert_eq!(prices.for_units(9, true), Money::from_cents(920));
    }

    #[test]
    fn dependency_prefix() {
        let dep = TierDependency::new("halbtax_plus", "halbtax");
        assert!(dep.applies_to("halbtax_plus_level3"));
        assert!(!dep.applies_to("halbtax"));
        assert!(!dep.applies_to("GA"));
    }

    #[test]
    fn partial_override_from_json() {
        let config: TariffConfig =
            serde_json::from_str(r#"{"home_zone": 10, "placeholder": "none"}"#).unwrap();
        assert_eq!(config.home_zone, ZoneId(10));
        assert_eq!(config.placeholder, "none");
        assert_eq!(config.home_zone_weight, 2);
        assert_eq!(config.extension, ExtensionPrices::default());
    }
}
