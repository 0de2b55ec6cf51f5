//! Command-line interface for pilosa-sync
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 5 random bits from seed 42 in a 10x3 matrix, to stdout
//! pilosa-sync generate random 42 10 3 5
//!
//! # Row-major walk into a compressed file
//! pilosa-sync generate --output bits.csv.gz sequential 1_000 1_000 1_000_000
//! ```
//!
//! ## Import
//! ```bash
//! pilosa-sync import localhost:10101 bits.csv.gz 100_000
//!
//! # From stdin into a custom index and frame
//! pilosa-sync generate random 1 10 10 100 | pilosa-sync import localhost - 10 --index repo --frame stars
//! ```

use clap::{Parser, Subcommand};
use pilosa_sync::generate::run_generate;
use pilosa_sync::import::run_import;
use pilosa_sync::{GenerateArgs, ImportArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pilosa-sync")]
#[command(about = "Generate synthetic bit data and import it into Pilosa")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write synthetic row,col records as CSV
    Generate(GenerateArgs),

    /// Import a CSV file of row,col records into Pilosa
    Import(ImportArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr so generated CSV on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(&args)?;
        }
        Commands::Import(args) => {
            run_import(&args).await?;
        }
    }

    Ok(())
}
