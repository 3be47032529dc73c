//! Terminal tables for the metrics and portfolio commands.

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::core::UseCaseRecord;
use crate::portfolio::{group_by_quadrant, timeframe_summaries, PortfolioMetrics};
use crate::roi::calculate_roi;

use super::formatters::{format_currency, format_payback, format_percent};

/// One row per use case, in collection order.
pub fn format_metrics_table(use_cases: &[UseCaseRecord]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "", "Use Case", "Timeframe", "Risk", "ROI", "NPV", "Payback", "Risk-Adj. Value",
        ]);

    for use_case in use_cases {
        let metrics = calculate_roi(use_case);
        table.add_row(vec![
            Cell::new(if use_case.selected { "✓" } else { " " }),
            Cell::new(&use_case.name),
            Cell::new(use_case.timeframe),
            Cell::new(use_case.risk_level),
            Cell::new(format_percent(metrics.basic_roi)),
            Cell::new(format_currency(metrics.npv)),
            Cell::new(format_payback(metrics.payback_period)),
            Cell::new(format_currency(metrics.risk_adjusted_value)),
        ]);
    }

    table.to_string()
}

pub fn format_portfolio_summary(use_cases: &[UseCaseRecord], metrics: &PortfolioMetrics) -> String {
    let selected = use_cases.iter().filter(|uc| uc.selected).count();
    let mut lines = vec![
        format!(
            "{} ({} of {} use cases selected)",
            "Portfolio".bold(),
            selected,
            use_cases.len()
        ),
        format!(
            "  Implementation cost: {}",
            format_currency(metrics.total_implementation_cost)
        ),
        format!("  Annual cost:         {}", format_currency(metrics.total_annual_cost)),
        format!(
            "  Annual benefits:     {}",
            format_currency(metrics.total_annual_benefits)
        ),
        format!("  Portfolio ROI:       {}", colored_percent(metrics.portfolio_roi)),
        format!("  Portfolio NPV:       {}", format_currency(metrics.portfolio_npv)),
        format!("  Average payback:     {:.1} months", metrics.average_payback),
        format!("  Near-term ROI:       {}", colored_percent(metrics.near_term_roi)),
        format!("  Long-term ROI:       {}", colored_percent(metrics.long_term_roi)),
        String::new(),
        "Roadmap".bold().to_string(),
    ];

    for summary in timeframe_summaries(use_cases) {
        lines.push(format!(
            "  {:<7} {:>2} initiatives  cost {}  benefits {}/year",
            summary.timeframe.as_str(),
            summary.count,
            format_currency(summary.implementation_cost),
            format_currency(summary.hard_benefits)
        ));
    }

    lines.push(String::new());
    lines.push("Impact / Effort".bold().to_string());
    for (quadrant, members) in group_by_quadrant(use_cases) {
        let names: Vec<&str> = members.iter().map(|uc| uc.name.as_str()).collect();
        lines.push(format!(
            "  {:<18} {}",
            quadrant.label(),
            if names.is_empty() {
                "-".dimmed().to_string()
            } else {
                names.join(", ")
            }
        ));
    }

    lines.join("\n")
}

fn colored_percent(value: f64) -> ColoredString {
    let text = format_percent(value);
    if value >= 0.0 {
        text.green()
    } else {
        text.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::calculate_portfolio_metrics;

    fn records() -> Vec<UseCaseRecord> {
        vec![
            UseCaseRecord::new("1", "Chatbot")
                .with_costs(150_000.0, 50_000.0)
                .with_hard_benefits(500_000.0)
                .with_scores(2, 4),
            UseCaseRecord::new("2", "Legacy Cleanup")
                .with_costs(10_000.0, 5_000.0)
                .with_scores(5, 1)
                .with_selected(false),
        ]
    }

    #[test]
    fn metrics_table_lists_every_use_case() {
        colored::control::set_override(false);
        let table = format_metrics_table(&records());
        assert!(table.contains("Chatbot"));
        assert!(table.contains("Legacy Cleanup"));
        assert!(table.contains("+150.0%"));
        assert!(table.contains("N/A"));
    }

    #[test]
    fn summary_reports_selection_and_quadrants() {
        colored::control::set_override(false);
        let records = records();
        let metrics = calculate_portfolio_metrics(&records);
        let summary = format_portfolio_summary(&records, &metrics);
        assert!(summary.contains("1 of 2 use cases selected"));
        assert!(summary.contains("Quick Wins"));
        assert!(summary.contains("Legacy Cleanup"));
        assert!(summary.contains("$150,000"));
    }
}
