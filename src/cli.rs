use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Formats accepted by the canvas export; the terminal view is Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CanvasFormat {
    Json,
    Markdown,
}

impl From<CanvasFormat> for OutputFormat {
    fn from(format: CanvasFormat) -> Self {
        match format {
            CanvasFormat::Json => OutputFormat::Json,
            CanvasFormat::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "roicanvas")]
#[command(about = "ROI, portfolio and roadmap canvas calculator for AI initiatives", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Portfolio snapshot to read and update
    #[arg(long, global = true, default_value = "roicanvas.json")]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .roicanvas.toml configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Write a snapshot with sample initiatives
    Demo {
        /// Overwrite an existing snapshot
        #[arg(short, long)]
        force: bool,
    },

    /// Show ROI metrics for every use case
    Metrics {
        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show portfolio totals, quadrants and timeframe buckets
    Portfolio {
        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Rank use cases by risk-adjusted value and select within a budget
    Select {
        /// Budget ceiling (defaults to the snapshot's budget)
        #[arg(short, long)]
        budget: Option<f64>,
    },

    /// Suggest a timeframe for every selected use case
    Roadmap,

    /// Merge use cases and company context from an assistant response
    Ingest {
        /// File holding the response text, or - for stdin
        input: PathBuf,

        /// The user message that prompted the response
        #[arg(long)]
        message: Option<String>,
    },

    /// Assemble and export the canvas document
    Canvas {
        /// Company name (defaults to the snapshot's)
        #[arg(long)]
        company: Option<String>,

        /// Industry (defaults to the snapshot's)
        #[arg(long)]
        industry: Option<String>,

        /// Author shown in the header
        #[arg(long)]
        author: Option<String>,

        /// Export format (inferred from --output, else Markdown)
        #[arg(short, long, value_enum)]
        format: Option<CanvasFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
