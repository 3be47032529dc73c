use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::canvas::{generate_canvas, CanvasContext};
use crate::config::RoiCanvasConfig;
use crate::output::{format_for_path, render_canvas, write_canvas_file, OutputFormat};

#[derive(Debug, Clone, Default)]
pub struct CanvasOptions {
    pub company: Option<String>,
    pub industry: Option<String>,
    pub author: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn export_canvas(path: &Path, config: &RoiCanvasConfig, options: CanvasOptions) -> Result<()> {
    let state = super::load_state(path, config)?;

    let context = CanvasContext::new(
        options.company.unwrap_or_else(|| state.company_name.clone()),
        options.industry.unwrap_or_else(|| state.industry.clone()),
    )
    .with_designed_by(
        options
            .author
            .unwrap_or_else(|| config.canvas.designed_by.clone()),
    );
    let canvas = generate_canvas(&state.use_cases, &context);

    match options.output {
        Some(output) => {
            let format = options
                .format
                .or_else(|| format_for_path(&output))
                .unwrap_or(OutputFormat::Markdown);
            write_canvas_file(&canvas, format, &output)
                .with_context(|| format!("Failed to write canvas to {}", output.display()))?;
            info!(format = ?format, "canvas exported");
            println!("Canvas written to {}", output.display());
        }
        None => {
            let format = options.format.unwrap_or(OutputFormat::Markdown);
            print!("{}", render_canvas(&canvas, format)?);
        }
    }

    Ok(())
}
