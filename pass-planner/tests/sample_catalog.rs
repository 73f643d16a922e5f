//! End-to-end searches over the built-in Zurich catalog.

use pass_planner::catalog::{Catalog, zurich_sample};
use pass_planner::domain::{AgeBracket, Money};
use pass_planner::planner::{Plan, Planner, SearchRequest, SearchResult, is_redundant};

fn run(catalog: &Catalog, age: u16, k: usize, fixed: &[String]) -> SearchResult {
    let request = SearchRequest::new(&catalog.journeys, AgeBracket(age), k)
        .with_fixed(fixed.iter().cloned());
    Planner::new(&catalog.products, &catalog.tariff).search(&request)
}

#[test]
fn pay_as_you_go_baseline_total() {
    let catalog = zurich_sample();
    assert_eq!(
        Plan::baseline(&catalog.journeys).total,
        Money::from_cents(1_033_040)
    );
}

#[test]
fn default_fixed_products_in_every_plan() {
    let catalog = zurich_sample();
    let result = run(&catalog, 24, 5, &catalog.fixed);

    assert_eq!(result.plans.len(), 5);
    for plan in &result.plans {
        assert!(plan.products.starts_with(&["halbtax".to_string(), "night_GA".to_string()]));
        assert_eq!(plan.total, plan.subscription_cost + plan.other_cost);
    }
    assert!(result.plans.windows(2).all(|w| w[0].total <= w[1].total));
}

#[test]
fn no_plan_contains_a_subsumed_pass() {
    let catalog = zurich_sample();
    let result = run(&catalog, 24, 50, &[]);

    for plan in &result.plans {
        let products: Vec<_> = plan
            .products
            .iter()
            .filter_map(|name| catalog.product(name))
            .collect();
        assert!(!is_redundant(&products), "{:?}", plan.products);
        assert!(
            !(plan.products.contains(&"GA".to_string())
                && plan.products.contains(&"night_GA".to_string()))
        );
    }
}

#[test]
fn fixing_an_ineligible_product_leaves_no_plans() {
    // The night pass is only sold to the youngest bracket.
    let catalog = zurich_sample();
    let result = run(&catalog, 25, 5, &catalog.fixed);

    assert!(result.plans.is_empty());
    assert_eq!(result.stats.priced, 0);
}

#[test]
fn dependent_tiers_always_come_with_base() {
    let catalog = zurich_sample();
    for age in [24, 25, 26] {
        let result = run(&catalog, age, 100, &[]);
        for plan in &result.plans {
            if plan.products.iter().any(|n| n.starts_with("halbtax_plus")) {
                assert!(plan.products.contains(&"halbtax".to_string()));
            }
        }
    }
}

#[test]
fn search_beats_or_matches_pay_as_you_go() {
    let catalog = zurich_sample();
    let baseline = Plan::baseline(&catalog.journeys).total;
    for age in [24, 25, 26] {
        let result = run(&catalog, age, 1, &[]);
        assert!(result.plans[0].total <= baseline);
    }
}

#[test]
fn loading_from_file_matches_built_in() {
    let catalog = zurich_sample();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zurich.json");
    std::fs::write(&path, catalog.to_json_string().unwrap()).unwrap();

    let loaded = Catalog::load(&path).unwrap();
    let from_file = run(&loaded, 24, 5, &loaded.fixed);
    let built_in = run(&catalog, 24, 5, &catalog.fixed);
    assert_eq!(from_file.plans, built_in.plans);
}
