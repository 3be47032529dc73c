use anyhow::Result;
use clap::Parser;
use roicanvas::cli::{Cli, Commands};
use roicanvas::commands::{self, CanvasOptions};
use roicanvas::config::load_config;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config();
    let state = cli.state.as_path();

    match cli.command {
        Commands::Init { force } => commands::init_config(&std::env::current_dir()?, force),
        Commands::Demo { force } => commands::write_demo_snapshot(state, &config, force),
        Commands::Metrics { format } => commands::show_metrics(state, &config, format),
        Commands::Portfolio { format } => commands::show_portfolio(state, &config, format),
        Commands::Select { budget } => commands::select_by_budget(state, &config, budget),
        Commands::Roadmap => commands::assign_roadmap(state, &config),
        Commands::Ingest { input, message } => {
            commands::ingest_response(state, &config, &input, message.as_deref())
        }
        Commands::Canvas {
            company,
            industry,
            author,
            format,
            output,
        } => commands::export_canvas(
            state,
            &config,
            CanvasOptions {
                company,
                industry,
                author,
                format: format.map(Into::into),
                output,
            },
        ),
    }
}
