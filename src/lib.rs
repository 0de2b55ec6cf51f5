//! pilosa-sync library
//!
//! Synthetic bit generation and batched bit import for Pilosa.
//!
//! # Features
//!
//! - Deterministic coordinate generation (seeded random, sequential walk)
//! - Plain or gzip-compressed CSV files, or stdio
//! - Batched import over HTTP with a concurrent live progress display
//! - Dry-run mode and optional JSON-lines metrics
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate 10 million random bits into a compressed file
//! pilosa-sync generate --output bits.csv.gz random 42 1_000 1_000_000 10_000_000
//!
//! # Import them in batches of 100k
//! pilosa-sync import localhost:10101 bits.csv.gz 100_000
//! ```

use clap::Args;
use pilosa_sink::{DEFAULT_FRAME, DEFAULT_INDEX};
use std::path::PathBuf;
use std::time::Duration;

pub mod config;
pub mod generate;
pub mod import;

// Re-export the import pipeline for convenience
pub use pilosa_sync_csv_source as csv;

use csv::DEFAULT_STATUS_CAPACITY;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Output path; `-` writes to stdout and a `.gz` suffix compresses
    #[arg(long, short, default_value = "-")]
    pub output: String,

    /// Generation strategy (random, sequential)
    pub strategy: String,

    /// Strategy parameters, e.g. RANDOM_SEED MAX_ROW_ID MAX_COL_ID BIT_COUNT
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub params: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Pilosa address: host, host:port or URL
    pub pilosa_addr: String,

    /// CSV file to import (.csv or .csv.gz); `-` reads stdin
    pub path: String,

    /// Number of bits per import request; accepts `_` separators
    #[arg(value_parser = config::parse_batch_size)]
    pub batch_size: usize,

    /// Target index
    #[arg(long, default_value = DEFAULT_INDEX)]
    pub index: String,

    /// Target frame
    #[arg(long, default_value = DEFAULT_FRAME)]
    pub frame: String,

    /// How often the progress line is redrawn (e.g. 500ms, 1s)
    #[arg(long, default_value = "1s", value_parser = config::parse_duration)]
    pub refresh_interval: Duration,

    /// Capacity of the status channel between importer and monitor
    #[arg(long, default_value_t = DEFAULT_STATUS_CAPACITY, value_parser = config::parse_capacity)]
    pub status_capacity: usize,

    /// Append one JSON metrics line per second to this file
    #[arg(long, value_name = "PATH")]
    pub emit_metrics: Option<PathBuf>,

    /// Read and batch everything without contacting Pilosa
    #[arg(long)]
    pub dry_run: bool,

    /// Hide the live progress line
    #[arg(long)]
    pub quiet: bool,
}

impl ImportArgs {
    pub fn to_config(&self) -> csv::Config {
        csv::Config {
            batch_size: self.batch_size,
            status_capacity: self.status_capacity,
            refresh_interval: self.refresh_interval,
            emit_metrics: self.emit_metrics.clone(),
            quiet: self.quiet,
        }
    }
}
