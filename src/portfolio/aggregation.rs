//! Portfolio-level totals over the selected subset of a collection.

use serde::{Deserialize, Serialize};

use crate::core::{round_to, Timeframe, UseCaseRecord};
use crate::roi::{self, PaybackPeriod};

/// Aggregate metrics for the records currently marked `selected`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_implementation_cost: f64,
    pub total_annual_cost: f64,
    pub total_annual_benefits: f64,
    #[serde(rename = "portfolioROI")]
    pub portfolio_roi: f64,
    #[serde(rename = "portfolioNPV")]
    pub portfolio_npv: f64,
    pub average_payback: f64,
    #[serde(rename = "nearTermROI")]
    pub near_term_roi: f64,
    #[serde(rename = "longTermROI")]
    pub long_term_roi: f64,
}

/// Summed benefit and full cost of a subset treated as one initiative.
#[derive(Clone, Copy, Debug, Default)]
struct SubsetTotals {
    benefit: f64,
    cost: f64,
}

impl SubsetTotals {
    fn of<'a>(use_cases: impl Iterator<Item = &'a UseCaseRecord>) -> Self {
        use_cases.fold(Self::default(), |acc, uc| Self {
            benefit: acc.benefit + uc.hard_benefits,
            cost: acc.cost + uc.total_cost(),
        })
    }

    fn roi_percent(self) -> f64 {
        roi::roi_percent(self.benefit, self.cost)
    }
}

pub fn selected_use_cases(use_cases: &[UseCaseRecord]) -> Vec<&UseCaseRecord> {
    use_cases.iter().filter(|uc| uc.selected).collect()
}

/// Compute portfolio metrics over the selected records only.
///
/// Percentages are rounded to two decimals, money to whole dollars and the
/// average payback to one decimal. An empty selection yields all zeros.
pub fn calculate_portfolio_metrics(use_cases: &[UseCaseRecord]) -> PortfolioMetrics {
    let selected = selected_use_cases(use_cases);
    if selected.is_empty() {
        return PortfolioMetrics::default();
    }

    let total_implementation_cost: f64 = selected.iter().map(|uc| uc.implementation_cost).sum();
    let total_annual_cost: f64 = selected.iter().map(|uc| uc.annual_cost).sum();
    let total_annual_benefits: f64 = selected.iter().map(|uc| uc.hard_benefits).sum();

    let near_term = SubsetTotals::of(
        selected
            .iter()
            .copied()
            .filter(|uc| uc.timeframe.is_near_term()),
    );
    let long_term = SubsetTotals::of(
        selected
            .iter()
            .copied()
            .filter(|uc| uc.timeframe == Timeframe::ThreeYear),
    );

    let portfolio_roi = roi::roi_percent(
        total_annual_benefits,
        total_implementation_cost + total_annual_cost,
    );

    // NPV is always taken per record first, then summed
    let portfolio_npv: f64 = selected.iter().map(|uc| roi::npv(uc)).sum();

    let finite_paybacks: Vec<f64> = selected
        .iter()
        .filter_map(|uc| roi::payback_period(uc).months())
        .collect();
    let average_payback = mean(&finite_paybacks);

    PortfolioMetrics {
        total_implementation_cost: round_to(total_implementation_cost, 0),
        total_annual_cost: round_to(total_annual_cost, 0),
        total_annual_benefits: round_to(total_annual_benefits, 0),
        portfolio_roi: round_to(portfolio_roi, 2),
        portfolio_npv: round_to(portfolio_npv, 0),
        average_payback: round_to(average_payback, 1),
        near_term_roi: round_to(near_term.roi_percent(), 2),
        long_term_roi: round_to(long_term.roi_percent(), 2),
    }
}

/// Mean of finite paybacks; zero when none exist.
pub fn average_payback(paybacks: &[PaybackPeriod]) -> f64 {
    let finite: Vec<f64> = paybacks.iter().filter_map(PaybackPeriod::months).collect();
    mean(&finite)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RiskLevel;

    fn use_case(id: &str, timeframe: Timeframe, implementation: f64, annual: f64, benefits: f64) -> UseCaseRecord {
        UseCaseRecord::new(id, id)
            .with_costs(implementation, annual)
            .with_hard_benefits(benefits)
            .with_timeframe(timeframe)
    }

    #[test]
    fn empty_selection_is_all_zero() {
        let records = vec![use_case("a", Timeframe::Q1, 100.0, 10.0, 500.0).with_selected(false)];
        assert_eq!(calculate_portfolio_metrics(&records), PortfolioMetrics::default());
        assert_eq!(calculate_portfolio_metrics(&[]), PortfolioMetrics::default());
    }

    #[test]
    fn totals_only_count_selected_records() {
        let records = vec![
            use_case("a", Timeframe::Q1, 100_000.0, 30_000.0, 350_000.0),
            use_case("b", Timeframe::ThreeYear, 400_000.0, 100_000.0, 1_200_000.0),
            use_case("c", Timeframe::OneYear, 999_999.0, 1.0, 1.0).with_selected(false),
        ];
        let metrics = calculate_portfolio_metrics(&records);
        assert_eq!(metrics.total_implementation_cost, 500_000.0);
        assert_eq!(metrics.total_annual_cost, 130_000.0);
        assert_eq!(metrics.total_annual_benefits, 1_550_000.0);
        // (1_550_000 - 630_000) / 630_000
        assert_eq!(metrics.portfolio_roi, 146.03);
    }

    #[test]
    fn near_and_long_term_roi_split_by_timeframe() {
        let records = vec![
            use_case("q1", Timeframe::Q1, 100_000.0, 0.0, 150_000.0),
            use_case("year", Timeframe::OneYear, 100_000.0, 0.0, 250_000.0),
            use_case("three", Timeframe::ThreeYear, 200_000.0, 0.0, 100_000.0),
        ];
        let metrics = calculate_portfolio_metrics(&records);
        assert_eq!(metrics.near_term_roi, 100.0);
        assert_eq!(metrics.long_term_roi, -50.0);
    }

    #[test]
    fn long_term_roi_is_zero_without_three_year_records() {
        let records = vec![use_case("q1", Timeframe::Q1, 100.0, 0.0, 300.0)];
        let metrics = calculate_portfolio_metrics(&records);
        assert_eq!(metrics.long_term_roi, 0.0);
        assert_eq!(metrics.near_term_roi, 200.0);
    }

    #[test]
    fn portfolio_npv_sums_record_npvs() {
        let records = vec![
            use_case("a", Timeframe::Q1, 150_000.0, 50_000.0, 500_000.0).with_risk(RiskLevel::Low),
            use_case("b", Timeframe::OneYear, 10_000.0, 0.0, 0.0),
        ];
        let expected = (roi::npv(&records[0]) + roi::npv(&records[1])).round();
        assert_eq!(calculate_portfolio_metrics(&records).portfolio_npv, expected);
    }

    #[test]
    fn average_payback_skips_never() {
        let records = vec![
            use_case("fast", Timeframe::Q1, 12_000.0, 0.0, 12_000.0),
            use_case("slow", Timeframe::Q1, 36_000.0, 0.0, 12_000.0),
            use_case("never", Timeframe::Q1, 5_000.0, 1_000.0, 0.0),
        ];
        // 12 and 36 months, the third never pays back
        assert_eq!(calculate_portfolio_metrics(&records).average_payback, 24.0);
    }

    #[test]
    fn average_payback_is_zero_when_nothing_pays_back() {
        let records = vec![use_case("never", Timeframe::Q1, 5_000.0, 1_000.0, 0.0)];
        assert_eq!(calculate_portfolio_metrics(&records).average_payback, 0.0);
        assert_eq!(average_payback(&[PaybackPeriod::Never]), 0.0);
    }

    #[test]
    fn metrics_serialize_with_upper_case_acronyms() {
        let json = serde_json::to_value(PortfolioMetrics::default()).unwrap();
        assert!(json.get("portfolioROI").is_some());
        assert!(json.get("portfolioNPV").is_some());
        assert!(json.get("nearTermROI").is_some());
    }
}
