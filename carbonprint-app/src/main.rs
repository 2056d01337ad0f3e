use anyhow::Result;
use carbonprint_schemas::language::Language;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod plotting;
mod report;
mod session;
mod submission;
mod workflow;

/// Personal carbon footprint calculator.
#[derive(Debug, Parser)]
#[command(name = "carbonprint", version, about)]
pub struct Cli {
    /// Lifestyle input file (YAML). Form defaults are used when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Emission factor file (YAML) replacing the built-in regional table.
    #[arg(long)]
    pub factors: Option<PathBuf>,

    /// Region whose built-in factor table is used (e.g. indonesia).
    #[arg(long)]
    pub region: Option<String>,

    /// Transport mode replacing the input file's answer (car, motorcycle, bus, train, walk_or_bike).
    #[arg(long)]
    pub transport_mode: Option<String>,

    /// Diet type replacing the input file's answer (meat_heavy, omnivore, vegetarian, vegan).
    #[arg(long)]
    pub diet: Option<String>,

    /// Output language: en or id.
    #[arg(long, default_value = "en")]
    pub language: Language,

    /// Directory for charts and the report. Defaults to data/runs/carbon_<timestamp>.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Endpoint receiving a JSON summary of the result.
    #[arg(long, env = "CARBONPRINT_SUBMIT_URL")]
    pub submit_url: Option<String>,

    /// Print the summary only; skip charts and the report document.
    #[arg(long)]
    pub no_report: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    println!("--- Personal Carbon Footprint Calculator ---");

    let overrides = config::Overrides {
        region: cli.region.clone(),
        transport_mode: cli.transport_mode.clone(),
        diet_type: cli.diet.clone(),
    };
    let run_config =
        config::RunConfig::load(cli.input.as_deref(), cli.factors.as_deref(), &overrides)?;
    workflow::run(&cli, run_config)?;

    Ok(())
}
