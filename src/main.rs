//! VitalReport - health sensor data analysis
//!
//! A CLI tool that reads a sensor CSV export, computes averages and
//! abnormal-reading counts, and writes a plain-text report.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any failure (arguments, configuration, or a pipeline stage)

mod analysis;
mod cli;
mod config;
mod error;
mod loader;
mod models;
mod pipeline;
mod report;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, CONFIG_FILE_NAME};
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    if let Err(e) = config.validate() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    // Initialize logging
    init_logging(&args, &config);

    info!("VitalReport v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    debug!("Effective config: {:?}", config);

    // Run the analysis
    if let Err(e) = run_analysis(&config) {
        error!("Analysis failed in {} stage: {}", e.stage(), e);
        eprintln!("\n❌ Error during {} stage: {}", e.stage(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .vitalreport.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to change the input file, output path, and format.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args, config: &Config) {
    let level = if config.general.verbose && !args.quiet {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the pipeline and print the outcome.
fn run_analysis(config: &Config) -> Result<(), error::PipelineError> {
    println!("📥 Reading sensor data: {}", config.input.path.display());

    let summary = pipeline::run(config)?;

    if config.output.print {
        println!();
        print!("{}", summary.rendered);
        println!();
    }

    println!("📊 Readings analyzed: {}", summary.total_readings);
    println!(
        "   Avg heart rate: {:.1} bpm | Avg systolic BP: {:.1} mmHg | Avg glucose: {:.1} mg/dL",
        summary.statistics.avg_heart_rate,
        summary.statistics.avg_systolic_bp,
        summary.statistics.avg_glucose
    );
    println!(
        "   High heart rate: {} | High systolic BP: {} | High glucose: {}",
        summary.abnormal.high_heart_rate,
        summary.abnormal.high_blood_pressure,
        summary.abnormal.high_glucose
    );
    println!(
        "Analysis report saved to '{}'",
        summary.output_path.display()
    );

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("⚠️  Ignoring unreadable {}: {:#}", CONFIG_FILE_NAME, e);
            Ok(Config::default())
        }
    }
}
