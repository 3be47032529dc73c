use std::path::Path;

use anyhow::Result;

use crate::config::RoiCanvasConfig;
use crate::output::{format_metrics_table, OutputFormat};
use crate::roi::{calculate_roi, RoiMetrics};

pub fn show_metrics(path: &Path, config: &RoiCanvasConfig, format: Option<OutputFormat>) -> Result<()> {
    let state = super::load_state(path, config)?;

    match format.unwrap_or(config.output.default_format) {
        OutputFormat::Json => {
            let metrics: Vec<RoiMetrics> = state.use_cases.iter().map(calculate_roi).collect();
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        OutputFormat::Terminal | OutputFormat::Markdown => {
            if state.use_cases.is_empty() {
                println!("No use cases yet. Try `roicanvas demo` or `roicanvas ingest`.");
            } else {
                println!("{}", format_metrics_table(&state.use_cases));
            }
        }
    }

    Ok(())
}
