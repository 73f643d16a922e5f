//! Subscription planner.
//!
//! This module answers: "which passes should I buy for this year of
//! travel?" It prices every combination of optional products against the
//! recurring journeys and returns the cheapest ones.
//!
//! Per candidate combination the search rejects dominated or unsellable
//! bundles, then prices each journey through the fare resolver, which in
//! turn relies on zone coverage and time-window matching.

mod config;
mod fare;
mod rank;
mod redundancy;
mod search;
mod subsets;


pub use config::{ExtensionPrices, TariffConfig, TierDependency};
pub use fare::{best_discount, price_journey};
pub use rank::{rank_plans, top_k};
pub use redundancy::{Subsumed, find_subsumed, is_redundant};
pub use search::{Plan, Planner, SearchRequest, SearchResult, SearchStats, top_k_plans};
pub use subsets::Subsets;
