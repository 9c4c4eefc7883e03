use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod analysis;
mod config;
mod monitor;
mod output;
mod report;
mod sampler;

use config::RunConfig;
use monitor::MetricsCollector;
use report::CsvSink;

#[derive(Parser)]
#[command(name = "loadprobe")]
#[command(about = "Samples host CPU/RAM/GPU utilization and flags bottlenecks", long_about = None)]
struct Cli {
    /// Total run length in seconds
    #[arg(long, default_value_t = 60)]
    duration: u64,

    /// Target spacing between samples in seconds
    #[arg(long, default_value_t = 1.0)]
    interval: f64,

    /// CSV log file, truncated at start
    #[arg(long, default_value = "test_log.csv")]
    log: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RunConfig {
        duration_secs: cli.duration,
        interval_secs: cli.interval,
        log_path: cli.log,
    };
    config.validate()?;

    output::print_start_banner(config.duration_secs);
    info!(
        duration_secs = config.duration_secs,
        interval_secs = config.interval_secs,
        log = %config.log_path.display(),
        "starting run"
    );

    let mut sink = CsvSink::create(&config.log_path)?;
    let mut collector = MetricsCollector::new();
    let series = sampler::run(&config, &mut collector, &mut sink).await?;

    output::print_summary(&series);

    let verdict = analysis::analyze(&series);
    output::print_verdict(&verdict);
    sink.append_verdict(&verdict)?;
    sink.flush()?;

    output::print_log_location(sink.path());
    info!(
        samples = series.iterations(),
        interrupted = series.interrupted,
        "run complete"
    );
    Ok(())
}
