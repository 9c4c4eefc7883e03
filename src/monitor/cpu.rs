use sysinfo::System;

/// CPU utilization monitoring.
///
/// Usage percentages are deltas between two refreshes, so the constructor
/// performs a warm-up refresh; without it the first reading would be 0.
pub struct CpuMonitor {
    system: System,
}

impl CpuMonitor {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        system.refresh_cpu_usage();
        Self { system }
    }

    /// Instantaneous overall CPU utilization in `[0, 100]`.
    pub fn utilization_percent(&mut self) -> f64 {
        self.system.refresh_cpu_usage();
        self.system.global_cpu_info().cpu_usage() as f64
    }
}

impl Default for CpuMonitor {
    fn default() -> Self {
        Self::new()
    }
}
