//! Timeframe assignment and per-bucket roll-ups for the roadmap view.

use serde::{Deserialize, Serialize};

use crate::core::{Timeframe, UseCaseRecord};

/// Count and totals of the selected records in one timeframe bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeSummary {
    pub timeframe: Timeframe,
    pub count: usize,
    pub implementation_cost: f64,
    pub hard_benefits: f64,
}

/// Suggested bucket from effort and impact alone.
pub fn suggest_timeframe(use_case: &UseCaseRecord) -> Timeframe {
    let effort = use_case.effort_score.value();
    let impact = use_case.impact_score.value();

    if effort <= 2 && impact >= 4 {
        Timeframe::Q1
    } else if effort >= 4 {
        Timeframe::ThreeYear
    } else {
        Timeframe::OneYear
    }
}

/// Reassign the timeframe of every selected record; unselected records are left alone.
pub fn auto_assign_timeframes(use_cases: &[UseCaseRecord]) -> Vec<UseCaseRecord> {
    use_cases
        .iter()
        .map(|uc| {
            if uc.selected {
                UseCaseRecord {
                    timeframe: suggest_timeframe(uc),
                    ..uc.clone()
                }
            } else {
                uc.clone()
            }
        })
        .collect()
}

pub fn timeframe_summaries(use_cases: &[UseCaseRecord]) -> Vec<TimeframeSummary> {
    Timeframe::ALL
        .iter()
        .map(|&timeframe| {
            let bucket = use_cases
                .iter()
                .filter(|uc| uc.selected && uc.timeframe == timeframe);
            bucket.fold(
                TimeframeSummary {
                    timeframe,
                    count: 0,
                    implementation_cost: 0.0,
                    hard_benefits: 0.0,
                },
                |mut acc, uc| {
                    acc.count += 1;
                    acc.implementation_cost += uc.implementation_cost;
                    acc.hard_benefits += uc.hard_benefits;
                    acc
                },
            )
        })
        .collect()
}
