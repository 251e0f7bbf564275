use clap::Parser;
use driftscope_core::config::Config;
use driftscope_core::{AppError, AppResult};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod analyze;

#[derive(Parser)]
#[command(name = "driftscope")]
#[command(about = "Analyze audio probe logs for wall-clock vs audio-timeline drift.")]
struct Cli {
    #[arg(value_name = "LOGFILE")]
    logfile: PathBuf,

    #[arg(long, value_name = "MS")]
    base_offset_ms: Option<f64>,

    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{}", err.message());
        process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> AppResult<()> {
    validate_log_level(&cli.log_level)?;
    validate_log_format(&cli.log_format)?;
    init_logging(&cli.log_level, &cli.log_format);

    if let Some(offset) = cli.base_offset_ms {
        if !offset.is_finite() {
            return Err(AppError::usage("--base-offset-ms must be finite"));
        }
    }

    let config = Config::load(cli.config.as_deref())?;
    let base_offset_ms = cli.base_offset_ms.or(config.analyzer.base_offset_ms);

    analyze::analyze_command(&cli.logfile, base_offset_ms)
}

fn validate_log_level(value: &str) -> AppResult<()> {
    match value {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
        _ => Err(AppError::usage(format!(
            "invalid --log-level '{value}'; expected error|warn|info|debug|trace"
        ))),
    }
}

fn validate_log_format(value: &str) -> AppResult<()> {
    match value {
        "text" | "json" => Ok(()),
        _ => Err(AppError::usage(format!(
            "invalid --log-format '{value}'; expected text|json"
        ))),
    }
}

// Diagnostics go to stderr only; stdout carries nothing but the report.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::new(level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        "json" => builder.json().init(),
        _ => builder.init(),
    }
}
