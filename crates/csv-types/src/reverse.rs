//! Reverse conversion: CSV line → Coordinate.
//!
//! [`decode_coordinate`] handles a single line and [`CoordinateReader`]
//! streams any `Read` source. Both share the same field validation, so a
//! compressed stream decodes exactly like the plain one.

use std::io::Read;
use sync_core::Coordinate;

/// Why a record could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("expected 2 fields, found {0}")]
    FieldCount(usize),

    #[error("'{0}' is not a 64-bit integer")]
    NotAnInteger(String),

    #[error("unexpected data after the record terminator")]
    TrailingData,

    #[error("record is not valid UTF-8")]
    InvalidUtf8,

    #[error("{0}")]
    Unreadable(String),
}

/// Error type for record decoding.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A record failed to decode
    #[error("Malformed record at line {line}: {reason}")]
    Malformed { line: u64, reason: MalformedReason },

    /// The underlying reader failed
    #[error("Failed to read records: {0}")]
    Io(#[from] std::io::Error),
}

fn coordinate_from_fields(fields: &[&str], line: u64) -> Result<Coordinate, RecordError> {
    let malformed = |reason| RecordError::Malformed { line, reason };

    let (row, column) = match fields {
        [row, column] => (*row, *column),
        _ => return Err(malformed(MalformedReason::FieldCount(fields.len()))),
    };
    let parse = |field: &str| {
        field
            .parse::<i64>()
            .map_err(|_| malformed(MalformedReason::NotAnInteger(field.to_string())))
    };

    Ok(Coordinate::new(parse(row)?, parse(column)?))
}

/// Decode one `row,col` line.
///
/// A single trailing `\n` or `\r\n` is accepted. Errors report line 1.
pub fn decode_coordinate(line: &str) -> Result<Coordinate, RecordError> {
    let body = line.strip_suffix('\n').unwrap_or(line);
    let body = body.strip_suffix('\r').unwrap_or(body);
    if body.contains(['\n', '\r']) {
        return Err(RecordError::Malformed {
            line: 1,
            reason: MalformedReason::TrailingData,
        });
    }

    let fields: Vec<&str> = body.split(',').collect();
    coordinate_from_fields(&fields, 1)
}

/// Streams coordinates out of header-less CSV.
///
/// Empty lines are skipped. The iterator yields `Err` once for the first
/// bad record or read failure and then stops.
pub struct CoordinateReader<R: Read> {
    reader: csv::Reader<R>,
    record: csv::StringRecord,
    records_read: u64,
    failed: bool,
}

impl<R: Read> CoordinateReader<R> {
    pub fn new(inner: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(inner);
        Self {
            reader,
            record: csv::StringRecord::new(),
            records_read: 0,
            failed: false,
        }
    }

    /// Number of coordinates decoded so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    fn decode_current(&self) -> Result<Coordinate, RecordError> {
        let line = self.record.position().map(|p| p.line()).unwrap_or(0);
        let fields: Vec<&str> = self.record.iter().collect();
        coordinate_from_fields(&fields, line)
    }
}

fn map_csv_error(err: csv::Error) -> RecordError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(e) => RecordError::Io(e),
        csv::ErrorKind::Utf8 { .. } => RecordError::Malformed {
            line,
            reason: MalformedReason::InvalidUtf8,
        },
        other => RecordError::Malformed {
            line,
            reason: MalformedReason::Unreadable(format!("{other:?}")),
        },
    }
}

impl<R: Read> Iterator for CoordinateReader<R> {
    type Item = Result<Coordinate, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = match self.reader.read_record(&mut self.record) {
            Ok(false) => return None,
            Ok(true) => self.decode_current(),
            Err(e) => Err(map_csv_error(e)),
        };

        match result {
            Ok(coordinate) => {
                self.records_read += 1;
                Some(Ok(coordinate))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
