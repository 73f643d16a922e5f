//! Detection of unlimited passes made pointless by another pass in the same
//! combination.
//!
//! If pass B covers all of pass A's zones for all of A's hours, A can never
//! save money next to B. Such combinations are cost-dominated by the same
//! combination without A, so the planner skips them unpriced.

use crate::domain::{SubscriptionProduct, covers};

/// A pass whose coverage is wholly contained in another pass's coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsumed<'a> {
    /// The pointless pass.
    pub redundant: &'a str,
    /// The pass covering it.
    pub by: &'a str,
}

/// Find the first unlimited pass in `combo` subsumed by another one.
///
/// Only unlimited coverage is considered; discount cards never subsume
/// each other here.
pub fn find_subsumed<'a>(combo: &[&'a SubscriptionProduct]) -> Option<Subsumed<'a>> {
    let unlimited: Vec<_> = combo
        .iter()
        .filter_map(|&p| p.coverage.as_unlimited().map(|cov| (p.name.as_str(), cov)))
        .collect();

    for (i, (a_name, (a_zones, a_window))) in unlimited.iter().enumerate() {
        for (j, (b_name, (b_zones, b_window))) in unlimited.iter().enumerate() {
            if i == j {
                continue;
            }
            if covers(b_zones, a_zones) && b_window.covers_window(a_window) {
                return Some(Subsumed {
                    redundant: *a_name,
                    by: *b_name,
                });
            }
        }
    }

    None
}

/// Returns true if any unlimited pass in `combo` is subsumed by another.
pub fn is_redundant(combo: &[&SubscriptionProduct]) -> bool {
    find_subsumed(combo).is_some()
}
