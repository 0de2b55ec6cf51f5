//! Metrics emission for bit import runs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;

/// Shared counters appended to a JSON-lines file while an import runs
#[derive(Clone)]
pub struct MetricsCollector {
    bits_imported: Arc<AtomicU64>,
    batches: Arc<AtomicU64>,
    start_time: Instant,
    output_path: PathBuf,
}

/// Single metrics entry (one JSON line)
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsEntry {
    pub timestamp: String,
    pub bits_imported: u64,
    pub batches: u64,
    pub throughput_bits_per_sec: f64,
    pub memory_mb: u64,
    pub elapsed_secs: f64,
}

impl MetricsCollector {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            bits_imported: Arc::new(AtomicU64::new(0)),
            batches: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
            output_path,
        }
    }

    /// Record one acknowledged batch of `bits` coordinates
    pub fn add_batch(&self, bits: u64) {
        self.bits_imported.fetch_add(bits, Ordering::Relaxed);
        self.batches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn bits_imported(&self) -> u64 {
        self.bits_imported.load(Ordering::Relaxed)
    }

    fn snapshot(&self) -> MetricsEntry {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let bits = self.bits_imported.load(Ordering::Relaxed);

        let throughput = if elapsed > 0.0 {
            bits as f64 / elapsed
        } else {
            0.0
        };

        MetricsEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            bits_imported: bits,
            batches: self.batches.load(Ordering::Relaxed),
            throughput_bits_per_sec: throughput,
            memory_mb: resident_memory_mb(),
            elapsed_secs: elapsed,
        }
    }

    /// Start the background task that appends one snapshot per `interval`.
    ///
    /// The task runs until aborted; callers abort it once the import ends.
    pub fn start_emission_task(
        &self,
        interval: Duration,
    ) -> tokio::task::JoinHandle<std::io::Result<()>> {
        let collector = self.clone();

        tokio::spawn(async move {
            let mut file = collector.open_output().await?;
            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;
                collector.append_snapshot(&mut file).await?;
            }
        })
    }

    /// Append one last snapshot once the import has finished
    pub async fn write_final_snapshot(&self) -> std::io::Result<()> {
        let mut file = self.open_output().await?;
        self.append_snapshot(&mut file).await
    }

    async fn open_output(&self) -> std::io::Result<tokio::fs::File> {
        tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)
            .await
    }

    async fn append_snapshot(&self, file: &mut tokio::fs::File) -> std::io::Result<()> {
        let json_line = serde_json::to_string(&self.snapshot())?;
        file.write_all(json_line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await
    }
}

/// Resident set size from /proc/self/status; 0 where unavailable
fn resident_memory_mb() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|content| {
            content
                .lines()
                .find(|line| line.starts_with("VmRSS:"))
                .and_then(|line| line.split_whitespace().nth(1))
                .and_then(|kb| kb.parse::<u64>().ok())
                .map(|kb| kb / 1024)
        })
        .unwrap_or(0)
}
