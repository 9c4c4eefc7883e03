pub mod collector;
pub mod cpu;
pub mod gpu;
pub mod memory;

pub use collector::{MetricsCollector, Sample};
pub use cpu::CpuMonitor;
pub use gpu::{GpuProbe, GpuReading};
pub use memory::MemoryMonitor;
