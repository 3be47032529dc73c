use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::RoiCanvasConfig;
use crate::demo::demo_use_cases;
use crate::state::PortfolioState;

pub fn write_demo_snapshot(path: &Path, config: &RoiCanvasConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Snapshot {} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let mut state = PortfolioState::with_budget(config.portfolio.default_budget);
    state.set_use_cases(demo_use_cases());
    super::save_state(&state, path)?;

    info!("wrote demo snapshot");
    println!(
        "Wrote {} sample use cases to {}",
        state.use_cases.len(),
        path.display()
    );
    Ok(())
}
