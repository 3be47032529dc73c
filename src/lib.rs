// Export modules for library usage
pub mod canvas;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod demo;
pub mod ingest;
pub mod io;
pub mod output;
pub mod portfolio;
pub mod roi;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    round_to, Error, Result, RiskLevel, Score1To5, Timeframe, UseCaseRecord, UNNAMED_USE_CASE,
};

pub use crate::roi::{
    basic_roi, calculate_roi, npv, payback_period, risk_adjusted_value, risk_multiplier,
    PaybackPeriod, RoiMetrics, DISCOUNT_RATE, PROJECTION_YEARS,
};

pub use crate::portfolio::{
    auto_assign_timeframes, calculate_portfolio_metrics, group_by_quadrant, merge_candidates,
    rank_use_cases, select_portfolio_by_budget, select_within_budget, PortfolioMetrics, Quadrant,
};

pub use crate::canvas::{assemble_canvas, generate_canvas, CanvasContext, CanvasDocument};

pub use crate::output::{
    export_to_json, export_to_markdown, format_currency, format_payback, format_percent,
    OutputFormat,
};

pub use crate::config::{load_config, RoiCanvasConfig};
pub use crate::ingest::{extract_from_response, ExtractedResponse, RawUseCase};
pub use crate::state::PortfolioState;
