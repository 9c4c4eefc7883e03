use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

const TOOL_NAME: &str = "nvidia-smi";
const QUERY_ARGS: [&str; 2] = [
    "--query-gpu=utilization.gpu,memory.used,memory.total",
    "--format=csv,noheader,nounits",
];
const QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// One successful reading for the primary GPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuReading {
    pub utilization_percent: f64,
    pub vram_used_mb: f64,
    pub vram_total_mb: f64,
}

/// One-shot `nvidia-smi` adapter.
///
/// Availability is probed on every call rather than cached, so the tool
/// appearing or disappearing mid-run (hot-plug, driver reset) is tolerated.
/// Every failure mode collapses to `None`: a missing reading is not an error.
pub struct GpuProbe;

impl GpuProbe {
    pub fn new() -> Self {
        Self
    }

    /// Query utilization and VRAM of the first-listed GPU, or `None` if the
    /// tool is absent or the query fails in any way.
    pub async fn read(&self) -> Option<GpuReading> {
        let tool = locate_tool()?;

        let query = Command::new(&tool)
            .args(QUERY_ARGS)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .stdin(Stdio::null())
            .output();

        let output = match tokio::time::timeout(QUERY_TIMEOUT, query).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                debug!(error = %err, "nvidia-smi failed to spawn, skipping GPU sample");
                return None;
            }
            Err(_) => {
                debug!("nvidia-smi timed out, skipping GPU sample");
                return None;
            }
        };

        if !output.status.success() {
            debug!(status = ?output.status, "nvidia-smi exited non-zero, skipping GPU sample");
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let reading = stdout.lines().next().and_then(parse_query_line);
        if reading.is_none() {
            debug!("unparseable nvidia-smi output, skipping GPU sample");
        }
        reading
    }
}

impl Default for GpuProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the query tool on PATH. Checked fresh per call.
fn locate_tool() -> Option<PathBuf> {
    locate_tool_in(&env::var_os("PATH")?)
}

fn locate_tool_in(search_path: &OsStr) -> Option<PathBuf> {
    env::split_paths(search_path)
        .map(|dir| dir.join(TOOL_NAME))
        .find(|candidate| candidate.is_file())
}

/// Parse one `csv,noheader,nounits` line: `util, mem.used, mem.total`.
fn parse_query_line(line: &str) -> Option<GpuReading> {
    let mut fields = line.split(',').map(str::trim);
    let utilization_percent = fields.next()?.parse().ok()?;
    let vram_used_mb = fields.next()?.parse().ok()?;
    let vram_total_mb = fields.next()?.parse().ok()?;
    Some(GpuReading {
        utilization_percent,
        vram_used_mb,
        vram_total_mb,
    })
}
