//! Terminal presentation: colorized percentages, progress lines, summary.

use colored::{Color, ColoredString, Colorize};

use crate::analysis::Verdict;
use crate::monitor::Sample;
use crate::sampler::{mean, RunSeries};

/// Color band for a utilization percentage: red from 85, yellow from 50,
/// green below.
fn band(value: f64) -> Color {
    if value >= 85.0 {
        Color::Red
    } else if value >= 50.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// A percentage rendered to one decimal in its band color.
pub fn pct(value: f64) -> ColoredString {
    format!("{value:.1}%").color(band(value))
}

/// The per-iteration progress line. GPU segments only appear when a reading
/// was obtained this iteration.
pub fn progress_line(elapsed_secs: u64, remaining_secs: u64, sample: &Sample) -> String {
    let head = format!(
        "[{elapsed_secs:02}s | Kalan: {remaining_secs:02}s] CPU: {} | RAM: {}",
        pct(sample.cpu_percent),
        pct(sample.ram_percent),
    );
    match &sample.gpu {
        Some(gpu) => format!(
            "{head} | GPU: {} | VRAM: {:.0}/{:.0} MB",
            pct(gpu.utilization_percent),
            gpu.vram_used_mb,
            gpu.vram_total_mb,
        ),
        None => head,
    }
}

pub fn print_start_banner(duration_secs: u64) {
    println!(
        "{}",
        format!("Test başlıyor... Süre: {duration_secs}s\n").cyan()
    );
}

/// Per-metric averages. A metric with zero samples prints `n/a`; the GPU
/// line is omitted entirely when no reading ever succeeded.
pub fn print_summary(series: &RunSeries) {
    println!("{}", "\n--- TEST BİTTİ ---".magenta());
    println!("CPU Ortalama: {}", avg_cell(mean(&series.cpu)));
    println!("RAM Ortalama: {}", avg_cell(mean(&series.ram)));
    if let Some(gpu_avg) = mean(&series.gpu) {
        println!("GPU Ortalama: {}", pct(gpu_avg));
    }
}

fn avg_cell(avg: Option<f64>) -> ColoredString {
    match avg {
        Some(value) => pct(value),
        None => "n/a".normal(),
    }
}

pub fn print_verdict(verdict: &Verdict) {
    println!("{}", "\n--- DARBOĞAZ ANALİZİ ---".cyan());
    for line in verdict.lines() {
        if verdict.is_clear() {
            println!("{}", format!("- {line}").green());
        } else {
            println!("{}", format!("- {line}").red());
        }
    }
}

pub fn print_log_location(path: &std::path::Path) {
    println!(
        "{}",
        format!("\n📄 Log dosyası oluşturuldu: {}", path.display()).green()
    );
}
