use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::config::RoiCanvasConfig;
use crate::output::{format_portfolio_summary, OutputFormat};
use crate::portfolio::{group_by_quadrant, timeframe_summaries, PortfolioMetrics, Quadrant, TimeframeSummary};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioReport<'a> {
    company_name: &'a str,
    industry: &'a str,
    budget_constraint: f64,
    metrics: PortfolioMetrics,
    timeframes: Vec<TimeframeSummary>,
    quadrants: Vec<QuadrantReport<'a>>,
}

#[derive(Debug, Serialize)]
struct QuadrantReport<'a> {
    quadrant: Quadrant,
    ids: Vec<&'a str>,
}

pub fn show_portfolio(path: &Path, config: &RoiCanvasConfig, format: Option<OutputFormat>) -> Result<()> {
    let state = super::load_state(path, config)?;
    let metrics = state.portfolio_metrics();

    match format.unwrap_or(config.output.default_format) {
        OutputFormat::Json => {
            let report = PortfolioReport {
                company_name: &state.company_name,
                industry: &state.industry,
                budget_constraint: state.budget_constraint,
                metrics,
                timeframes: timeframe_summaries(&state.use_cases),
                quadrants: group_by_quadrant(&state.use_cases)
                    .into_iter()
                    .map(|(quadrant, members)| QuadrantReport {
                        quadrant,
                        ids: members.iter().map(|uc| uc.id.as_str()).collect(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Terminal | OutputFormat::Markdown => {
            println!("{}", format_portfolio_summary(&state.use_cases, &metrics));
        }
    }

    Ok(())
}
