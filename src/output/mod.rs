pub mod formatters;
pub mod json;
pub mod markdown;
pub mod terminal;

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::CanvasDocument;
use crate::core::Result;

pub use formatters::{format_currency, format_payback, format_percent};
pub use json::{export_to_json, parse_canvas_json, JsonWriter};
pub use markdown::{export_to_markdown, MarkdownWriter};
pub use terminal::{format_metrics_table, format_portfolio_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait CanvasWriter {
    fn write_canvas(&mut self, canvas: &CanvasDocument) -> Result<()>;
}

/// Writer for `format`; the terminal view reuses Markdown.
pub fn create_writer<'a, W: Write + 'a>(writer: W, format: OutputFormat) -> Box<dyn CanvasWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown | OutputFormat::Terminal => Box::new(MarkdownWriter::new(writer)),
    }
}

pub fn render_canvas(canvas: &CanvasDocument, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    create_writer(&mut buffer, format).write_canvas(canvas)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the rendered canvas to `path`, creating parent directories.
pub fn write_canvas_file(canvas: &CanvasDocument, format: OutputFormat, path: &Path) -> Result<()> {
    let content = render_canvas(canvas, format)?;
    if let Some(parent) = path.parent() {
        crate::io::ensure_dir(parent)?;
    }
    crate::io::write_file(path, &content)
}

/// Pick the format from a file extension when none was requested.
pub fn format_for_path(path: &Path) -> Option<OutputFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Some(OutputFormat::Json),
        Some("md") | Some("markdown") => Some(OutputFormat::Markdown),
        _ => None,
    }
}
