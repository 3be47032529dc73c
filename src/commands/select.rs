use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::RoiCanvasConfig;
use crate::output::format_currency;
use crate::portfolio::select_portfolio_by_budget;

pub fn select_by_budget(path: &Path, config: &RoiCanvasConfig, budget: Option<f64>) -> Result<()> {
    let mut state = super::load_state(path, config)?;
    let budget = budget.unwrap_or(state.budget_constraint);
    if !budget.is_finite() || budget < 0.0 {
        anyhow::bail!("Budget must be a non-negative number, got {}", budget);
    }

    let ranked = select_portfolio_by_budget(&state.use_cases, budget);
    let chosen: Vec<&str> = ranked
        .iter()
        .filter(|uc| uc.selected)
        .map(|uc| uc.name.as_str())
        .collect();
    let spent: f64 = ranked
        .iter()
        .filter(|uc| uc.selected)
        .map(|uc| uc.implementation_cost)
        .sum();

    info!(budget, selected = chosen.len(), "budget selection complete");
    println!(
        "Selected {} of {} use cases for {} of {}: {}",
        chosen.len(),
        ranked.len(),
        format_currency(spent),
        format_currency(budget),
        if chosen.is_empty() { "-".to_string() } else { chosen.join(", ") }
    );

    state.set_use_cases(ranked);
    super::save_state(&state, path)
}
