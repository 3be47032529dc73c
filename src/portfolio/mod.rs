//! Collection-level operations: aggregation, ranking, selection and merging.
//!
//! All functions take the collection by reference and return new values; the
//! caller owns the collection and decides when to replace it.

pub mod aggregation;
pub mod merge;
pub mod quadrant;
pub mod ranking;
pub mod roadmap;

pub use aggregation::{calculate_portfolio_metrics, selected_use_cases, PortfolioMetrics};
pub use merge::{merge_candidates, merge_use_cases, MergeOutcome};
pub use quadrant::{group_by_quadrant, set_quadrant_selection, Quadrant};
pub use ranking::{rank_use_cases, select_portfolio_by_budget, select_within_budget};
pub use roadmap::{auto_assign_timeframes, suggest_timeframe, timeframe_summaries, TimeframeSummary};
