//! Residual cash fare of a single trip under a set of owned products.

use std::collections::BTreeSet;

use crate::domain::{DiscountRate, Journey, Money, SubscriptionProduct, ZoneId, ZoneSpec};

use super::config::TariffConfig;

/// What the unlimited passes valid at one departure time cover, merged.
#[derive(Debug, Default)]
struct ActiveCoverage<'a> {
    regions: BTreeSet<&'a str>,
    zones: BTreeSet<ZoneId>,
}

impl<'a> ActiveCoverage<'a> {
    /// Merge the unlimited passes valid at `journey`'s departure.
    ///
    /// Returns `None` when a nationwide pass is valid, since the trip is then
    /// free regardless of anything else.
    fn collect(journey: &Journey, active: &[&'a SubscriptionProduct]) -> Option<Self> {
        let mut merged = Self::default();
        for &product in active {
            match product.coverage.unlimited_at(journey.departure) {
                Some(ZoneSpec::Nationwide) => return None,
                Some(ZoneSpec::Region(name)) => {
                    merged.regions.insert(name.as_str());
                }
                Some(ZoneSpec::ZoneSet(zones)) => merged.zones.extend(zones.iter().copied()),
                None => {}
            }
        }
        Some(merged)
    }
}

/// Lowest discount rate among owned discount products.
///
/// Discounts never stack; with none owned the full fare applies.
pub fn best_discount(active: &[&SubscriptionProduct]) -> DiscountRate {
    active
        .iter()
        .filter_map(|p| p.coverage.discount_rate())
        .fold(DiscountRate::NONE, |best, rate| {
            if rate.get() < best.get() { rate } else { best }
        })
}

/// Price one occurrence of `journey` when `active` products are owned.
///
/// - a nationwide pass valid at departure makes the trip free;
/// - a region request is free with that region's pass, else discounted;
/// - a zone-set request is free if a region pass or the owned zone passes
///   cover it; otherwise, when some zone pass is valid, an extension ticket
///   is bought for the missing zones (home zone weighted per the tariff);
/// - everything else pays the full fare times the best discount.
pub fn price_journey(
    journey: &Journey,
    active: &[&SubscriptionProduct],
    tariff: &TariffConfig,
) -> Money {
    let Some(coverage) = ActiveCoverage::collect(journey, active) else {
        return Money::ZERO;
    };

    match &journey.zones {
        ZoneSpec::Region(wanted) => {
            if coverage.regions.contains(wanted.as_str()) {
                return Money::ZERO;
            }
        }
        ZoneSpec::ZoneSet(wanted) => {
            if !coverage.regions.is_empty() || wanted.is_subset(&coverage.zones) {
                return Money::ZERO;
            }
            if !coverage.zones.is_empty() {
                let units: u32 = wanted
                    .difference(&coverage.zones)
                    .map(|zone| tariff.zone_weight(*zone))
                    .sum();
                let discounted = active.iter().any(|p| p.name == tariff.flat_rate_discount);
                return tariff.extension.for_units(units, discounted);
            }
        }
        ZoneSpec::Nationwide => {}
    }

    best_discount(active).apply(journey.full_price)
}
