//! Command handlers behind the `roicanvas` binary.
//!
//! Every command loads the portfolio snapshot, does its work with the pure
//! calculation modules and, when it changes something, writes the snapshot
//! back.

pub mod canvas;
pub mod demo;
pub mod ingest;
pub mod init;
pub mod metrics;
pub mod portfolio;
pub mod roadmap;
pub mod select;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::RoiCanvasConfig;
use crate::state::PortfolioState;

pub use canvas::{export_canvas, CanvasOptions};
pub use demo::write_demo_snapshot;
pub use ingest::ingest_response;
pub use init::init_config;
pub use metrics::show_metrics;
pub use portfolio::show_portfolio;
pub use roadmap::assign_roadmap;
pub use select::select_by_budget;

/// Load the snapshot, or start an empty one with the configured budget.
pub fn load_state(path: &Path, config: &RoiCanvasConfig) -> Result<PortfolioState> {
    let state = PortfolioState::load(path)
        .with_context(|| format!("Failed to load portfolio snapshot {}", path.display()))?;

    Ok(state.unwrap_or_else(|| {
        debug!("Starting an empty portfolio");
        PortfolioState::with_budget(config.portfolio.default_budget)
    }))
}

pub fn save_state(state: &PortfolioState, path: &Path) -> Result<()> {
    state
        .save(path)
        .with_context(|| format!("Failed to write portfolio snapshot {}", path.display()))
}
