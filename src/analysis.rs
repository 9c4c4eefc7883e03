//! Threshold-based bottleneck classification over completed series.

use crate::sampler::RunSeries;

/// A sample above this utilization counts as "high".
pub const HIGH_UTILIZATION_PCT: f64 = 85.0;
/// Fraction of high samples required for a resource to be flagged.
pub const PREVALENCE_PCT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cpu,
    Ram,
    Gpu,
}

impl Resource {
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Cpu => "CPU",
            Resource::Ram => "RAM",
            Resource::Gpu => "GPU",
        }
    }
}

/// One flagged resource with the fraction of run time it spent high.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub resource: Resource,
    pub high_fraction: f64,
}

impl Finding {
    pub fn describe(&self) -> String {
        format!(
            "{} darboğazı (%{:.1} süre yüksek kullanım)",
            self.resource.label(),
            self.high_fraction
        )
    }
}

/// Classification result. The "no bottleneck" sentinel is a distinct variant,
/// so it can never coexist with real findings.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Bottlenecks(Vec<Finding>),
    Clear,
}

impl Verdict {
    pub fn is_clear(&self) -> bool {
        matches!(self, Verdict::Clear)
    }

    /// One line per finding, or the single sentinel line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Verdict::Bottlenecks(findings) => {
                findings.iter().map(Finding::describe).collect()
            }
            Verdict::Clear => vec!["Belirgin darboğaz yok".to_string()],
        }
    }
}

/// Percentage of samples strictly above [`HIGH_UTILIZATION_PCT`].
/// An empty series has no high samples, so it can never meet the threshold.
pub fn high_fraction(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let high = series.iter().filter(|&&v| v > HIGH_UTILIZATION_PCT).count();
    high as f64 / series.len() as f64 * 100.0
}

/// Classify the three completed series. Pure function of its input.
///
/// Evaluation order is CPU, RAM, GPU; the GPU series is only considered when
/// non-empty, so an absent tool neither flags GPU nor counts as "GPU low".
pub fn analyze(series: &RunSeries) -> Verdict {
    let mut findings = Vec::new();

    for (resource, values) in [
        (Resource::Cpu, series.cpu.as_slice()),
        (Resource::Ram, series.ram.as_slice()),
        (Resource::Gpu, series.gpu.as_slice()),
    ] {
        if resource == Resource::Gpu && values.is_empty() {
            continue;
        }
        let fraction = high_fraction(values);
        if fraction >= PREVALENCE_PCT {
            findings.push(Finding {
                resource,
                high_fraction: fraction,
            });
        }
    }

    if findings.is_empty() {
        Verdict::Clear
    } else {
        Verdict::Bottlenecks(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(cpu: Vec<f64>, ram: Vec<f64>, gpu: Vec<f64>) -> RunSeries {
        RunSeries {
            cpu,
            ram,
            gpu,
            interrupted: false,
        }
    }

    #[test]
    fn half_high_is_flagged() {
        // 5 of 10 samples above 85 => 50% >= 40%.
        let cpu = [vec![90.0; 5], vec![10.0; 5]].concat();
        let verdict = analyze(&series(cpu, vec![10.0; 10], vec![]));
        let Verdict::Bottlenecks(findings) = verdict else {
            panic!("expected a CPU finding");
        };
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].resource, Resource::Cpu);
        assert_eq!(findings[0].high_fraction, 50.0);
    }

    #[test]
    fn under_prevalence_is_not_flagged() {
        // 3 of 10 above 85 => 30% < 40%.
        let cpu = [vec![90.0; 3], vec![10.0; 7]].concat();
        let verdict = analyze(&series(cpu, vec![10.0; 10], vec![]));
        assert!(verdict.is_clear());
    }

    #[test]
    fn threshold_is_strictly_above() {
        // Exactly 85.0 does not count as high.
        let verdict = analyze(&series(vec![85.0; 10], vec![0.0; 10], vec![]));
        assert!(verdict.is_clear());
    }

    #[test]
    fn prevalence_boundary_is_inclusive() {
        // 4 of 10 => exactly 40%, flagged.
        let cpu = [vec![90.0; 4], vec![10.0; 6]].concat();
        let verdict = analyze(&series(cpu, vec![10.0; 10], vec![]));
        assert_eq!(
            verdict,
            Verdict::Bottlenecks(vec![Finding {
                resource: Resource::Cpu,
                high_fraction: 40.0,
            }])
        );
    }

    #[test]
    fn empty_gpu_series_is_never_flagged() {
        let verdict = analyze(&series(vec![95.0; 4], vec![95.0; 4], vec![]));
        let Verdict::Bottlenecks(findings) = verdict else {
            panic!("expected findings");
        };
        let resources: Vec<_> = findings.iter().map(|f| f.resource).collect();
        assert_eq!(resources, vec![Resource::Cpu, Resource::Ram]);
    }

    #[test]
    fn gpu_flagged_when_series_present() {
        let verdict = analyze(&series(vec![10.0; 4], vec![10.0; 4], vec![99.0; 4]));
        assert_eq!(
            verdict,
            Verdict::Bottlenecks(vec![Finding {
                resource: Resource::Gpu,
                high_fraction: 100.0,
            }])
        );
    }

    #[test]
    fn findings_follow_evaluation_order() {
        let verdict = analyze(&series(vec![95.0; 4], vec![95.0; 4], vec![95.0; 4]));
        let Verdict::Bottlenecks(findings) = verdict else {
            panic!("expected findings");
        };
        let resources: Vec<_> = findings.iter().map(|f| f.resource).collect();
        assert_eq!(resources, vec![Resource::Cpu, Resource::Ram, Resource::Gpu]);
    }

    #[test]
    fn all_empty_series_yield_the_sentinel() {
        let verdict = analyze(&series(vec![], vec![], vec![]));
        assert!(verdict.is_clear());
        assert_eq!(verdict.lines(), vec!["Belirgin darboğaz yok".to_string()]);
    }

    #[test]
    fn sentinel_never_mixes_with_findings() {
        let cpu = [vec![90.0; 5], vec![10.0; 5]].concat();
        let verdict = analyze(&series(cpu, vec![10.0; 10], vec![]));
        let lines = verdict.lines();
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].contains("Belirgin"));
    }

    #[test]
    fn high_fraction_of_empty_series_is_zero() {
        assert_eq!(high_fraction(&[]), 0.0);
    }

    #[test]
    fn finding_text_has_one_decimal() {
        let finding = Finding {
            resource: Resource::Cpu,
            high_fraction: 100.0 / 3.0,
        };
        assert_eq!(
            finding.describe(),
            "CPU darboğazı (%33.3 süre yüksek kullanım)"
        );
    }
}
