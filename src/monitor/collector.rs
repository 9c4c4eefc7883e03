use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::monitor::{CpuMonitor, GpuProbe, GpuReading, MemoryMonitor};
use crate::sampler::MetricSource;

/// One point-in-time reading. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub cpu_percent: f64,
    pub ram_percent: f64,
    pub gpu: Option<GpuReading>,
}

impl Sample {
    /// Timestamp at second precision, local time.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Unified metrics collector backing the sampling loop.
pub struct MetricsCollector {
    cpu: CpuMonitor,
    memory: MemoryMonitor,
    gpu: GpuProbe,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            cpu: CpuMonitor::new(),
            memory: MemoryMonitor::new(),
            gpu: GpuProbe::new(),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricSource for MetricsCollector {
    async fn sample(&mut self) -> Sample {
        let cpu_percent = self.cpu.utilization_percent();
        let ram_percent = self.memory.utilization_percent();
        let gpu = self.gpu.read().await;
        Sample {
            timestamp: Local::now(),
            cpu_percent,
            ram_percent,
            gpu,
        }
    }
}
