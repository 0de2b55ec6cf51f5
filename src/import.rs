//! Import command handler.

use crate::csv::{self, FileSource, ImportReport, DEFAULT_BUFFER_SIZE};
use crate::ImportArgs;
use anyhow::Context;
use pilosa_client::PilosaClient;
use pilosa_sink::{DryRunSink, ImportSink, SchemaTarget};
use std::sync::Arc;

/// Run the import command.
pub async fn run_import(args: &ImportArgs) -> anyhow::Result<ImportReport> {
    let config = args.to_config();
    config.validate()?;

    let target = SchemaTarget::new(&args.index, &args.frame)?;
    let client = PilosaClient::new(&args.pilosa_addr, target)
        .with_context(|| format!("Invalid Pilosa address: {}", args.pilosa_addr))?;

    let source = FileSource::parse(&args.path);
    let reader = source.open(DEFAULT_BUFFER_SIZE)?;
    tracing::info!("Reading bits from {}", source.display_name());

    let sink: Arc<dyn ImportSink> = if args.dry_run {
        tracing::info!("Running in dry-run mode - no bits will be sent to Pilosa");
        Arc::new(DryRunSink::new())
    } else {
        Arc::new(client)
    };

    println!("Pilosa addr:         {}", args.pilosa_addr);
    println!("Batch size:          {}", args.batch_size);
    println!("===\n");

    let report = csv::sync(sink, reader, &config)
        .await
        .with_context(|| format!("Import from {} failed", source.display_name()))?;

    println!(
        "Imported {} bits in {} milliseconds",
        report.monitor.total_imported,
        report.monitor.elapsed.as_millis()
    );

    Ok(report)
}
