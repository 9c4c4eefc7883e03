//! The bounded sampling loop.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::pin::pin;
use std::time::Instant;
use tracing::info;

use crate::config::RunConfig;
use crate::monitor::Sample;
use crate::output;
use crate::report::CsvSink;

/// Source of point-in-time readings. The production implementation is
/// [`crate::monitor::MetricsCollector`]; tests substitute a fake.
#[async_trait]
pub trait MetricSource {
    async fn sample(&mut self) -> Sample;
}

/// Per-metric readings accumulated across one run.
///
/// `cpu` and `ram` grow by one entry per iteration; `gpu` only on iterations
/// where the GPU query succeeded.
#[derive(Debug, Default, Clone)]
pub struct RunSeries {
    pub cpu: Vec<f64>,
    pub ram: Vec<f64>,
    pub gpu: Vec<f64>,
    pub interrupted: bool,
}

impl RunSeries {
    pub fn push(&mut self, sample: &Sample) {
        self.cpu.push(sample.cpu_percent);
        self.ram.push(sample.ram_percent);
        if let Some(gpu) = &sample.gpu {
            self.gpu.push(gpu.utilization_percent);
        }
    }

    pub fn iterations(&self) -> usize {
        self.cpu.len()
    }
}

/// Arithmetic mean, undefined for an empty series.
pub fn mean(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(series.iter().sum::<f64>() / series.len() as f64)
}

/// Sample until `duration_secs` of wall-clock time has elapsed, spacing
/// iterations by a sleep after each sample (measurement time adds to the
/// period, drift is accepted).
///
/// Ctrl-C during the sleep ends the run early; the partial series is still
/// returned so the summary and verdict cover what was measured.
pub async fn run<S>(config: &RunConfig, source: &mut S, sink: &mut CsvSink) -> Result<RunSeries>
where
    S: MetricSource + Send,
{
    let start = Instant::now();
    let duration = config.duration_secs as f64;
    let mut series = RunSeries::default();
    let mut interrupt = pin!(tokio::signal::ctrl_c());

    loop {
        let elapsed = start.elapsed().as_secs_f64();
        if elapsed >= duration {
            break;
        }
        // Whole seconds for display only; termination is governed by the
        // check above.
        let elapsed_secs = elapsed as u64;
        let remaining_secs = config.duration_secs.saturating_sub(elapsed_secs);

        let sample = source.sample().await;
        println!(
            "{}",
            output::progress_line(elapsed_secs, remaining_secs, &sample)
        );
        sink.append_sample(&sample)
            .with_context(|| format!("failed to write to log file {}", config.log_path.display()))?;
        series.push(&sample);

        tokio::select! {
            _ = tokio::time::sleep(config.interval()) => {}
            _ = &mut interrupt => {
                info!("interrupt received, ending run after {} samples", series.iterations());
                series.interrupted = true;
                break;
            }
        }
    }

    Ok(series)
}
