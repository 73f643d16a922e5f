//! Exhaustive search for the cheapest product combinations.
//!
//! Every subset of the optional products is combined with the fixed ones,
//! filtered, and priced against the whole year of journeys. The catalogs
//! this targets are small, so the search is a plain power-set walk with no
//! pruning beyond the redundancy filter.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::domain::{AgeBracket, Journey, Money, SubscriptionProduct};

use super::config::TariffConfig;
use super::fare::price_journey;
use super::rank::top_k;
use super::redundancy::find_subsumed;
use super::subsets::Subsets;

/// One priced product combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Product names, fixed products first, then extras in catalog order.
    pub products: Vec<String>,

    /// Sum of product prices for the bracket.
    pub subscription_cost: Money,

    /// Single-ticket spending left after credit.
    pub other_cost: Money,

    /// `subscription_cost + other_cost`.
    pub total: Money,
}

impl Plan {
    /// The pay-as-you-go plan: no products, every trip at full fare.
    pub fn baseline(journeys: &[Journey]) -> Self {
        let other_cost: Money = journeys.iter().map(Journey::pay_as_you_go).sum();
        Self {
            products: Vec::new(),
            subscription_cost: Money::ZERO,
            other_cost,
            total: other_cost,
        }
    }

    /// Returns true if the plan holds no products.
    pub fn is_baseline(&self) -> bool {
        self.products.is_empty()
    }
}

/// Request for a plan search.
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    /// The year of travel to cover.
    pub journeys: &'a [Journey],

    /// Bracket selecting prices and credits.
    pub age: AgeBracket,

    /// Maximum number of plans to return.
    pub k: usize,

    /// Products forced into every plan.
    pub fixed: Vec<String>,
}

impl<'a> SearchRequest<'a> {
    /// Create a request with no fixed products.
    pub fn new(journeys: &'a [Journey], age: AgeBracket, k: usize) -> Self {
        Self {
            journeys,
            age,
            k,
            fixed: Vec::new(),
        }
    }

    /// Force the named products into every plan.
    pub fn with_fixed<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.fixed = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Counters describing one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Subsets of optional products visited.
    pub candidates: usize,

    /// Skipped because one unlimited pass subsumed another.
    pub redundant: usize,

    /// Skipped because a product is not sold to the bracket.
    pub ineligible: usize,

    /// Skipped because a dependent tier lacked its base product.
    pub missing_base: usize,

    /// Fully priced.
    pub priced: usize,
}

/// Result of a plan search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Cheapest plans, best first.
    pub plans: Vec<Plan>,

    /// What the search visited.
    pub stats: SearchStats,
}

/// Why a candidate combination was skipped.
enum Rejection<'a> {
    Redundant { redundant: &'a str, by: &'a str },
    Ineligible { product: &'a str },
    MissingBase { product: &'a str, base: &'a str },
}

/// Plan search over a product catalog.
pub struct Planner<'a> {
    products: &'a [SubscriptionProduct],
    tariff: &'a TariffConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(products: &'a [SubscriptionProduct], tariff: &'a TariffConfig) -> Self {
        Self { products, tariff }
    }

    /// Find the `request.k` cheapest plans.
    pub fn search(&self, request: &SearchRequest<'_>) -> SearchResult {
        let fixed_names: HashSet<&str> = request.fixed.iter().map(String::as_str).collect();
        for name in &fixed_names {
            if !self.products.iter().any(|p| p.name == *name) {
                warn!(product = %name, "Fixed product not in catalog, ignoring");
            }
        }

        let fixed: Vec<&SubscriptionProduct> = self
            .products
            .iter()
            .filter(|p| fixed_names.contains(p.name.as_str()))
            .collect();
        let variable: Vec<&SubscriptionProduct> = self
            .products
            .iter()
            .filter(|p| !fixed_names.contains(p.name.as_str()) && p.name != self.tariff.placeholder)
            .collect();

        let mut stats = SearchStats::default();
        let mut plans = Vec::new();

        for extra in Subsets::new(variable.len()) {
            stats.candidates += 1;
            let combo: Vec<&SubscriptionProduct> = fixed
                .iter()
                .copied()
                .chain(extra.iter().map(|&i| variable[i]))
                .collect();

            match self.evaluate(&combo, request) {
                Ok(plan) => {
                    stats.priced += 1;
                    plans.push(plan);
                }
                Err(Rejection::Redundant { redundant, by }) => {
                    stats.redundant += 1;
                    trace!(redundant, by, "Skipping combination with subsumed pass");
                }
                Err(Rejection::Ineligible { product }) => {
                    stats.ineligible += 1;
                    trace!(product, age = %request.age, "Skipping combination with ineligible product");
                }
                Err(Rejection::MissingBase { product, base }) => {
                    stats.missing_base += 1;
                    trace!(product, base, "Skipping dependent tier without its base");
                }
            }
        }

        if request.fixed.is_empty() && !plans.iter().any(Plan::is_baseline) {
            plans.push(Plan::baseline(request.journeys));
        }

        let plans = top_k(plans, request.k);

        debug!(
            age = %request.age,
            candidates = stats.candidates,
            priced = stats.priced,
            redundant = stats.redundant,
            ineligible = stats.ineligible,
            missing_base = stats.missing_base,
            returned = plans.len(),
            "Plan search complete"
        );

        SearchResult { plans, stats }
    }

    /// Filter one combination and price it.
    fn evaluate<'c>(
        &self,
        combo: &[&'c SubscriptionProduct],
        request: &SearchRequest<'_>,
    ) -> Result<Plan, Rejection<'c>>
    where
        'a: 'c,
    {
        if let Some(subsumed) = find_subsumed(combo) {
            return Err(Rejection::Redundant {
                redundant: subsumed.redundant,
                by: subsumed.by,
            });
        }

        let mut subscription_cost = Money::ZERO;
        for &product in combo {
            match product.price_for(request.age) {
                Some(price) => subscription_cost += price,
                None => {
                    return Err(Rejection::Ineligible {
                        product: &product.name,
                    });
                }
            }
        }

        if let Some(rejection) = self.missing_base(combo) {
            return Err(rejection);
        }

        let usage_cost: Money = request
            .journeys
            .iter()
            .map(|journey| price_journey(journey, combo, self.tariff) * journey.count)
            .sum();
        let credit: Money = combo.iter().map(|p| p.credit_for(request.age)).sum();
        let other_cost = usage_cost.saturating_sub(credit);

        Ok(Plan {
            products: combo.iter().map(|p| p.name.clone()).collect(),
            subscription_cost,
            other_cost,
            total: subscription_cost + other_cost,
        })
    }

    /// First dependent tier in `combo` whose base product is absent.
    fn missing_base<'c>(&self, combo: &[&'c SubscriptionProduct]) -> Option<Rejection<'c>>
    where
        'a: 'c,
    {
        for &product in combo {
            for dependency in &self.tariff.tier_dependencies {
                if dependency.applies_to(&product.name)
                    && !combo.iter().any(|p| p.name == dependency.base)
                {
                    return Some(Rejection::MissingBase {
                        product: &product.name,
                        base: &dependency.base,
                    });
                }
            }
        }
        None
    }
}

/// Find the `k` cheapest plans under the default tariff.
///
/// `fixed` names products included in every plan; unknown names are
/// ignored.
pub fn top_k_plans(
    journeys: &[Journey],
    products: &[SubscriptionProduct],
    age: AgeBracket,
    k: usize,
    fixed: &[&str],
) -> Vec<Plan> {
    let tariff = TariffConfig::default();
    let request = SearchRequest::new(journeys, age, k).with_fixed(fixed.iter().copied());
    Planner::new(products, &tariff).search(&request).plans
}
