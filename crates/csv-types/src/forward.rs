//! Forward conversion: Coordinate → CSV line.

use std::io::{self, Write};
use sync_core::Coordinate;

/// Encode a coordinate as a single `"<row>,<column>\n"` line.
pub fn encode_coordinate(coordinate: &Coordinate) -> String {
    format!("{},{}\n", coordinate.row, coordinate.column)
}

/// Streams coordinates to a writer as header-less CSV.
///
/// Records are terminated with `\n` and fields are never quoted, so the
/// output is byte-identical to concatenated [`encode_coordinate`] lines.
pub struct CoordinateWriter<W: Write> {
    writer: csv::Writer<W>,
    written: u64,
}

impl<W: Write> CoordinateWriter<W> {
    pub fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(inner);
        Self { writer, written: 0 }
    }

    /// Write one coordinate.
    pub fn write(&mut self, coordinate: &Coordinate) -> io::Result<()> {
        self.writer
            .write_record([coordinate.row.to_string(), coordinate.column.to_string()])
            .map_err(io::Error::from)?;
        self.written += 1;
        Ok(())
    }

    /// Number of coordinates written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush buffered records and hand back the inner writer.
    pub fn finish(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_coordinate() {
        assert_eq!(encode_coordinate(&Coordinate::new(0, 0)), "0,0\n");
        assert_eq!(encode_coordinate(&Coordinate::new(12, 345)), "12,345\n");
        assert_eq!(encode_coordinate(&Coordinate::new(-5, 6)), "-5,6\n");
    }

    #[test]
    fn test_writer_matches_encode() {
        let bits = [
            Coordinate::new(1, 2),
            Coordinate::new(i64::MAX, i64::MIN),
            Coordinate::new(0, 0),
        ];

        let mut writer = CoordinateWriter::new(Vec::new());
        for bit in &bits {
            writer.write(bit).unwrap();
        }
        assert_eq!(writer.written(), 3);
        let output = String::from_utf8(writer.finish().unwrap()).unwrap();

        let expected: String = bits.iter().map(encode_coordinate).collect();
        assert_eq!(output, expected);
    }

    #[test]
    fn test_writer_empty_output() {
        let writer = CoordinateWriter::new(Vec::new());
        assert!(writer.finish().unwrap().is_empty());
    }
}
