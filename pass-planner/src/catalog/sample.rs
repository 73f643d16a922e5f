//! Built-in sample catalog: a Zurich commuter's year on the ZVV and SBB
//! networks, with 2024 prices for ages 24-26.

use crate::domain::{
    AgeBracket, Coverage, DiscountRate, Journey, Money, SubscriptionProduct, TimeOfDay,
    TimeWindow, ZoneSpec,
};
use crate::planner::TariffConfig;

use super::Catalog;

/// Departure times each journey pattern is split into.
const MIDDAY: (u32, u32) = (12, 0);
const EARLY: (u32, u32) = (8, 0);
const LATE: (u32, u32) = (20, 0);

/// Builder for the sample catalog.
///
/// Inputs here are literals known to be valid, so the builder skips
/// entries it cannot build rather than failing.
#[derive(Debug, Default)]
struct SampleBuilder {
    journeys: Vec<Journey>,
    products: Vec<SubscriptionProduct>,
}

impl SampleBuilder {
    /// Add a journey pattern as midday, early and late variants.
    ///
    /// Variant names get `_early`/`_late` suffixes.
    fn pattern(mut self, name: &str, zones: Option<ZoneSpec>, cents: u64, counts: [u32; 3]) -> Self {
        let Some(zones) = zones else {
            return self;
        };
        let variants = [("", MIDDAY), ("_early", EARLY), ("_late", LATE)];
        for ((suffix, (hour, minute)), count) in variants.into_iter().zip(counts) {
            if let Ok(time) = TimeOfDay::from_hm(hour, minute) {
                self.journeys.push(Journey::new(
                    format!("{name}{suffix}"),
                    zones.clone(),
                    time,
                    Money::from_cents(cents),
                    count,
                ));
            }
        }
        self
    }

    fn product(mut self, product: SubscriptionProduct) -> Self {
        self.products.push(product);
        self
    }

    fn unlimited(
        self,
        name: &str,
        prices: &[(u16, u64)],
        zones: Option<ZoneSpec>,
        window: (&str, &str),
    ) -> Self {
        let (Some(zones), Ok(window)) = (zones, TimeWindow::parse(window.0, window.1)) else {
            return self;
        };
        self.product(SubscriptionProduct::new(
            name,
            brackets(prices),
            Coverage::Unlimited { zones, window },
        ))
    }

    fn discount(self, name: &str, prices: &[(u16, u64)], credit: &[(u16, u64)]) -> Self {
        let Ok(rate) = DiscountRate::new(0.5) else {
            return self;
        };
        self.product(
            SubscriptionProduct::new(name, brackets(prices), Coverage::Discount { rate })
                .with_credit(brackets(credit)),
        )
    }

    fn build(self, fixed: &[&str]) -> Catalog {
        Catalog {
            journeys: self.journeys,
            products: self.products,
            tariff: TariffConfig::default(),
            fixed: fixed.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

fn brackets(prices: &[(u16, u64)]) -> Vec<(AgeBracket, Money)> {
    prices
        .iter()
        .map(|&(age, units)| (AgeBracket(age), Money::from_units(units)))
        .collect()
}

fn zones(codes: &[u16]) -> Option<ZoneSpec> {
    ZoneSpec::zones(codes.iter().copied()).ok()
}

fn zurich() -> Option<ZoneSpec> {
    ZoneSpec::region("ZURICH").ok()
}

/// The sample catalog the command line uses when given no file.
///
/// The night pass and the half-fare card are fixed by default.
pub fn zurich_sample() -> Catalog {
    let nationwide = || Some(ZoneSpec::Nationwide);

    SampleBuilder::default()
        .pattern("default", zones(&[110]), 460, [584, 292, 584])
        .pattern("family", zones(&[110, 140, 141, 142]), 1120, [50, 10, 44])
        .pattern("airport_etc", zones(&[110, 121]), 700, [4, 10, 10])
        .pattern("work", zones(&[110, 141]), 700, [50, 42, 12])
        .pattern("canton", zurich(), 1780, [10, 6, 6])
        .pattern("suisse", nationwide(), 3500, [12, 4, 8])
        .pattern("holiday", nationwide(), 460, [30, 10, 30])
        .product(SubscriptionProduct::new(
            "no_sub",
            brackets(&[(24, 0), (25, 0), (26, 0)]),
            Coverage::None,
        ))
        .discount("halbtax", &[(24, 100), (25, 190), (26, 170)], &[])
        .discount(
            "halbtax_plus_level1",
            &[(24, 600), (25, 800), (26, 800)],
            &[(24, 1000), (25, 1000), (26, 1000)],
        )
        .discount(
            "halbtax_plus_level2",
            &[(24, 1125), (25, 1500), (26, 1500)],
            &[(24, 2000), (25, 2000), (26, 2000)],
        )
        .discount(
            "halbtax_plus_level3",
            &[(24, 1575), (25, 2100), (26, 2100)],
            &[(24, 3000), (25, 3000), (26, 3000)],
        )
        .unlimited("night_GA", &[(24, 100)], nationwide(), ("19:00", "05:00"))
        .unlimited(
            "GA",
            &[(24, 2780), (25, 3495), (26, 3995)],
            nationwide(),
            ("00:00", "23:59"),
        )
        .unlimited(
            "ZVV_110",
            &[(24, 586), (25, 809), (26, 809)],
            zones(&[110]),
            ("00:00", "23:59"),
        )
        .unlimited(
            "ZVV_110_140",
            &[(24, 861), (25, 1189), (26, 1189)],
            zones(&[110, 140]),
            ("00:00", "23:59"),
        )
        .unlimited(
            "ZVV_9_Uhr_110_111_121_140_150_154_155",
            &[(24, 827), (25, 827), (26, 827)],
            zones(&[110, 111, 121, 140, 150, 154, 155]),
            ("09:00", "05:00"),
        )
        .unlimited(
            "ZVV_9_Uhr_ZURICH",
            &[(24, 1282), (25, 1282), (26, 1282)],
            zurich(),
            ("09:00", "05:00"),
        )
        .unlimited(
            "ZVV_110_140_141_142",
            &[(24, 1393), (25, 1922), (26, 1922)],
            zones(&[110, 140, 141, 142]),
            ("00:00", "23:59"),
        )
        .unlimited(
            "ZVV_ZURICH",
            &[(24, 1663), (25, 2295), (26, 2295)],
            zurich(),
            ("00:00", "23:59"),
        )
        .build(&["night_GA", "halbtax"])
}
