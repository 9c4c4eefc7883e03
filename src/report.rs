//! Row-oriented CSV log: one row per sample, then a trailing verdict block.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::analysis::Verdict;
use crate::monitor::Sample;

pub const HEADER: &str = "Zaman,CPU (%),RAM (%),GPU (%),VRAM Kullanılan (MB),VRAM Toplam (MB)";
pub const ANALYSIS_MARKER: &str = "--- DARBOĞAZ ANALİZİ ---";

pub struct CsvSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl CsvSink {
    /// Create (truncating) the log file and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        let mut sink = Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        };
        writeln!(sink.writer, "{HEADER}")?;
        sink.writer.flush()?;
        Ok(sink)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One data row. GPU columns are empty strings when the sample has no
    /// GPU reading.
    pub fn append_sample(&mut self, sample: &Sample) -> Result<()> {
        match &sample.gpu {
            Some(gpu) => writeln!(
                self.writer,
                "{},{:.1},{:.1},{:.1},{:.0},{:.0}",
                sample.timestamp_str(),
                sample.cpu_percent,
                sample.ram_percent,
                gpu.utilization_percent,
                gpu.vram_used_mb,
                gpu.vram_total_mb,
            )?,
            None => writeln!(
                self.writer,
                "{},{:.1},{:.1},,,",
                sample.timestamp_str(),
                sample.cpu_percent,
                sample.ram_percent,
            )?,
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Trailing block: blank row, section marker, one row per verdict line.
    pub fn append_verdict(&mut self, verdict: &Verdict) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{ANALYSIS_MARKER}")?;
        for line in verdict.lines() {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
