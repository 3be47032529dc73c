use std::path::Path;

use anyhow::Result;

use crate::config::RoiCanvasConfig;
use crate::portfolio::{auto_assign_timeframes, timeframe_summaries};

pub fn assign_roadmap(path: &Path, config: &RoiCanvasConfig) -> Result<()> {
    let mut state = super::load_state(path, config)?;
    state.set_use_cases(auto_assign_timeframes(&state.use_cases));

    for summary in timeframe_summaries(&state.use_cases) {
        println!("{:<7} {}", summary.timeframe.as_str(), summary.count);
    }

    super::save_state(&state, path)
}
