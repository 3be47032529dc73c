//! Per-use-case investment formulas.
//!
//! Every function here is pure and total: degenerate inputs (zero cost,
//! non-positive net benefit) produce defined zero or `Never` results rather
//! than errors. The policy parameters below are fixed and must not vary per
//! use case.

pub mod models;


pub use models::{PaybackPeriod, RoiMetrics};

use crate::core::{round_to, RiskLevel, UseCaseRecord};

/// Annual discount rate applied to NPV cash flows.
pub const DISCOUNT_RATE: f64 = 0.10;
/// Number of years the flat annual cash flow is projected.
pub const PROJECTION_YEARS: i32 = 3;

pub fn risk_multiplier(risk_level: RiskLevel) -> f64 {
    match risk_level {
        RiskLevel::Low => 1.0,
        RiskLevel::Medium => 0.8,
        RiskLevel::High => 0.6,
    }
}

/// Unrounded `(benefit - cost) / cost * 100`, zero when there is no cost.
///
/// Shared with the portfolio aggregator, which applies it to summed subsets.
pub fn roi_percent(benefit: f64, cost: f64) -> f64 {
    if cost > 0.0 {
        (benefit - cost) / cost * 100.0
    } else {
        0.0
    }
}

/// Basic ROI in percent against implementation plus one year of running cost.
pub fn basic_roi(use_case: &UseCaseRecord) -> f64 {
    round_to(roi_percent(use_case.hard_benefits, use_case.total_cost()), 2)
}

/// Net present value over the projection horizon at the fixed discount rate.
pub fn npv(use_case: &UseCaseRecord) -> f64 {
    let annual_net_cash_flow = use_case.hard_benefits - use_case.annual_cost;

    let discounted: f64 = (1..=PROJECTION_YEARS)
        .map(|year| annual_net_cash_flow / (1.0 + DISCOUNT_RATE).powi(year))
        .sum();

    round_to(discounted - use_case.implementation_cost, 2)
}

pub fn payback_period(use_case: &UseCaseRecord) -> PaybackPeriod {
    let monthly_net_benefit = use_case.hard_benefits / 12.0 - use_case.annual_cost / 12.0;

    if monthly_net_benefit <= 0.0 {
        return PaybackPeriod::Never;
    }

    PaybackPeriod::Months(round_to(
        use_case.implementation_cost / monthly_net_benefit,
        1,
    ))
}

/// NPV scaled by the risk multiplier and the impact/effort ratio.
///
/// Effort is at least 1 by construction, so the ratio is always defined.
pub fn risk_adjusted_value(use_case: &UseCaseRecord) -> f64 {
    let impact_effort_ratio = use_case.impact_score.as_f64() / use_case.effort_score.as_f64();
    round_to(
        npv(use_case) * risk_multiplier(use_case.risk_level) * impact_effort_ratio,
        2,
    )
}

pub fn calculate_roi(use_case: &UseCaseRecord) -> RoiMetrics {
    RoiMetrics {
        use_case_id: use_case.id.clone(),
        basic_roi: basic_roi(use_case),
        npv: npv(use_case),
        payback_period: payback_period(use_case),
        risk_adjusted_value: risk_adjusted_value(use_case),
    }
}
