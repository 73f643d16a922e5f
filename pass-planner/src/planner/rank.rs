//! Ranking of priced plans.

use super::search::Plan;

/// Rank plans cheapest first.
///
/// The sort is stable: plans of equal total keep the order in which the
/// search produced them.
pub fn rank_plans(mut plans: Vec<Plan>) -> Vec<Plan> {
    plans.sort_by_key(|plan| plan.total);
    plans
}

/// Rank plans and keep the `k` cheapest.
pub fn top_k(plans: Vec<Plan>, k: usize) -> Vec<Plan> {
    let mut ranked = rank_plans(plans);
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;

    fn plan(names: &[&str], total: u64) -> Plan {
        Plan {
            products: names.iter().map(|n| (*n).to_string()).collect(),
            subscription_cost: Money::ZERO,
            other_cost: Money::from_units(total),
            total: Money::from_units(total),
        }
    }

    #[test]
    fn cheapest_first() {
        let ranked = rank_plans(vec![plan(&["a"], 30), plan(&["b"], 10), plan(&["c"], 20)]);
        let totals: Vec<u64> = ranked.iter().map(|p| p.total.cents() / 100).collect();
        assert_eq!(totals, vec![10, 20, 30]);
    }

    #[test]
    fn ties_keep_production_order() {
        let ranked = rank_plans(vec![plan(&["first"], 10), plan(&["x"], 5), plan(&["second"], 10)]);
        assert_eq!(ranked[1].products, vec!["first"]);
        assert_eq!(ranked[2].products, vec!["second"]);
    }

    #[test]
    fn top_k_truncates() {
        let plans = vec![plan(&["a"], 3), plan(&["b"], 1), plan(&["c"], 2)];
        assert_eq!(top_k(plans.clone(), 2).len(), 2);
        assert_eq!(top_k(plans.clone(), 10).len(), 3);
        assert!(top_k(plans, 0).is_empty());
    }
}
