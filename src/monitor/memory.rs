use sysinfo::System;

/// Memory utilization monitoring.
pub struct MemoryMonitor {
    system: System,
}

impl MemoryMonitor {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        Self { system }
    }

    /// Used physical memory as a percentage of total, in `[0, 100]`.
    pub fn utilization_percent(&mut self) -> f64 {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return 0.0;
        }
        self.system.used_memory() as f64 / total as f64 * 100.0
    }
}

impl Default for MemoryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilization_is_a_percentage() {
        let mut monitor = MemoryMonitor::new();
        let util = monitor.utilization_percent();
        assert!((0.0..=100.0).contains(&util), "got {util}");
    }
}
