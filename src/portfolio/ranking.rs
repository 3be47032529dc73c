//! Priority ordering and greedy budget selection.
//!
//! Selection walks the ranked list once and takes whatever still fits. It
//! does not search for the highest-value subset under the budget: earlier
//! (higher priority) initiatives always win.

use std::cmp::Ordering;

use tracing::debug;

use crate::core::UseCaseRecord;
use crate::roi;

/// Sort records by risk-adjusted value, highest first.
///
/// The sort is stable: equal values keep their original relative order.
pub fn rank_use_cases(use_cases: &[UseCaseRecord]) -> Vec<UseCaseRecord> {
    let mut scored: Vec<(f64, &UseCaseRecord)> = use_cases
        .iter()
        .map(|uc| (roi::risk_adjusted_value(uc), uc))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored.into_iter().map(|(_, uc)| uc.clone()).collect()
}

/// Greedy pass over an already ranked list.
///
/// Only `implementation_cost` is charged against the budget. Records that do
/// not fit stay in the output, deselected.
pub fn select_within_budget(ranked: &[UseCaseRecord], max_budget: f64) -> Vec<UseCaseRecord> {
    let mut remaining_budget = max_budget;

    ranked
        .iter()
        .map(|uc| {
            let fits = uc.implementation_cost <= remaining_budget;
            if fits {
                remaining_budget -= uc.implementation_cost;
            } else {
                debug!(
                    use_case = %uc.name,
                    cost = uc.implementation_cost,
                    remaining_budget,
                    "use case does not fit remaining budget"
                );
            }
            UseCaseRecord {
                selected: fits,
                ..uc.clone()
            }
        })
        .collect()
}

/// Rank, then greedily select under `max_budget`.
pub fn select_portfolio_by_budget(use_cases: &[UseCaseRecord], max_budget: f64) -> Vec<UseCaseRecord> {
    select_within_budget(&rank_use_cases(use_cases), max_budget)
}
