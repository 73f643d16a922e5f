//! Presentation of search results.
//!
//! Plans are rendered either as the human-readable listing or as JSON
//! transfer objects for further processing.

use serde::Serialize;

use crate::domain::AgeBracket;
use crate::planner::Plan;

/// Shown in place of product names for the pay-as-you-go plan.
const NO_SUBSCRIPTIONS: &str = "(no subscriptions)";

/// A plan in JSON output.
#[derive(Debug, Serialize)]
pub struct PlanResult {
    /// Product names, empty for pay-as-you-go
    pub products: Vec<String>,

    /// Sum of subscription prices
    pub subscription_cost: f64,

    /// Single tickets after credit
    pub other_cost: f64,

    /// Subscription plus single tickets
    pub total: f64,
}

impl From<&Plan> for PlanResult {
    fn from(plan: &Plan) -> Self {
        Self {
            products: plan.products.clone(),
            subscription_cost: plan.subscription_cost.as_decimal(),
            other_cost: plan.other_cost.as_decimal(),
            total: plan.total.as_decimal(),
        }
    }
}

/// Ranked plans for one age bracket in JSON output.
#[derive(Debug, Serialize)]
pub struct BracketResult {
    pub age: AgeBracket,
    pub plans: Vec<PlanResult>,
}

impl BracketResult {
    pub fn new(age: AgeBracket, plans: &[Plan]) -> Self {
        Self {
            age,
            plans: plans.iter().map(PlanResult::from).collect(),
        }
    }
}

/// Render one bracket's plans as the text listing.
///
/// ```text
/// Age 24 - Top 2 plans:
///   1. [halbtax, night_GA]
///      Subscription costs: CHF 200.00 - Single Tickets: CHF 1234.50 → total CHF 1434.50
/// ```
pub fn render_text(age: AgeBracket, k: usize, plans: &[Plan]) -> String {
    let mut out = format!("Age {age} - Top {k} plans:\n");
    for (i, plan) in plans.iter().enumerate() {
        let names = if plan.products.is_empty() {
            NO_SUBSCRIPTIONS.to_string()
        } else {
            plan.products.join(", ")
        };
        out.push_str(&format!(
            "  {}. [{names}]\n     Subscription costs: CHF {} - Single Tickets: CHF {} → total CHF {}\n",
            i + 1,
            plan.subscription_cost,
            plan.other_cost,
            plan.total
        ));
    }
    out
}

/// Render all brackets as a JSON array.
pub fn render_json(results: &[BracketResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
