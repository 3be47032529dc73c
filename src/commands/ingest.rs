use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::RoiCanvasConfig;

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read response from stdin")?;
        Ok(text)
    } else {
        crate::io::read_file(input)
            .with_context(|| format!("Failed to read response {}", input.display()))
    }
}

pub fn ingest_response(
    path: &Path,
    config: &RoiCanvasConfig,
    input: &Path,
    message: Option<&str>,
) -> Result<()> {
    let text = read_input(input)?;
    let mut state = super::load_state(path, config)?;

    let batch_stamp = chrono::Utc::now().timestamp_millis();
    let report = state.ingest_response(&text, message, batch_stamp);

    info!(
        added = report.added,
        skipped = report.skipped.len(),
        company_updated = report.company_updated,
        "ingested response"
    );
    println!("Added {} use case(s)", report.added);
    if !report.skipped.is_empty() {
        println!("Skipped duplicates: {}", report.skipped.join(", "));
    }
    if report.company_updated {
        println!("Company context: {} ({})", state.company_name, state.industry);
    }

    super::save_state(&state, path)
}
