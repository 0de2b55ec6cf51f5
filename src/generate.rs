//! Generate command handler.

use crate::csv::{FileSink, DEFAULT_BUFFER_SIZE};
use crate::GenerateArgs;
use anyhow::Context;
use csv_types::CoordinateWriter;
use loadtest_generator::CoordinateGenerator;

/// Run the generate command; returns the number of records written.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<u64> {
    let mut generator = CoordinateGenerator::from_args(&args.strategy, &args.params)?;
    let sink = FileSink::parse(&args.output);

    tracing::info!("Generating {} bits", generator.remaining());
    tracing::info!("Strategy: {}", args.strategy);
    tracing::info!("Output: {}", sink.display_name());

    let output = sink.create(DEFAULT_BUFFER_SIZE)?;
    let mut writer = CoordinateWriter::new(output);

    for coordinate in generator.by_ref() {
        writer
            .write(&coordinate)
            .with_context(|| format!("Failed to write to {}", sink.display_name()))?;
    }

    let written = writer.written();
    writer
        .finish()
        .and_then(|output| output.finish())
        .with_context(|| format!("Failed to finish {}", sink.display_name()))?;

    tracing::info!("Generated {written} bits");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(output: &str, strategy: &str, params: &[&str]) -> GenerateArgs {
        GenerateArgs {
            output: output.to_string(),
            strategy: strategy.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_generate_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bits.csv");

        let written = run_generate(&args(
            path.to_str().unwrap(),
            "sequential",
            &["2", "3", "4"],
        ))
        .unwrap();

        assert_eq!(written, 4);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "0,0\n0,1\n0,2\n1,0\n");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");

        for path in [&first, &second] {
            run_generate(&args(path.to_str().unwrap(), "random", &["42", "10", "5", "50"]))
                .unwrap();
        }

        let first = std::fs::read_to_string(first).unwrap();
        assert_eq!(first, std::fs::read_to_string(second).unwrap());
        assert_eq!(first.lines().count(), 50);
    }

    #[test]
    fn test_generate_rejects_bad_params() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bits.csv");
        let output = path.to_str().unwrap();

        assert!(run_generate(&args(output, "random", &["42", "10", "5"])).is_err());
        assert!(run_generate(&args(output, "random", &["42", "0", "5", "3"])).is_err());
        assert!(run_generate(&args(output, "zipf", &["1", "2", "3"])).is_err());
    }
}
