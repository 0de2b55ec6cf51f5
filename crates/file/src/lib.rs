//! File source and sink abstraction for reading and writing bit data
//!
//! This crate provides a unified interface over standard streams and local
//! files, with transparent gzip handling keyed off the `.gz` suffix.
//!
//! # Source Types
//!
//! - **Stdin / Stdout**: selected with the path `-`
//! - **Local**: any other path
//!
//! Compression is a transport detail: a `.gz` source yields the same bytes
//! as its uncompressed counterpart, and a `.gz` sink compresses on write.
//!
//! # Example
//!
//! ```ignore
//! use pilosa_sync_file::{FileSource, DEFAULT_BUFFER_SIZE};
//!
//! let source = FileSource::parse("bits.csv.gz");
//! let reader = source.open(DEFAULT_BUFFER_SIZE)?;
//! // Decode reader...
//! ```

mod local;

use anyhow::Result;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub use local::OutputWriter;

/// Default buffer size for reading and writing (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Path that selects a standard stream instead of a file
pub const STDIO_PATH: &str = "-";

fn has_gzip_suffix(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Where records are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Standard input
    Stdin,
    /// Local filesystem path
    Local(PathBuf),
}

impl FileSource {
    /// Parse a path argument; `-` selects standard input
    pub fn parse(path: &str) -> Self {
        if path == STDIO_PATH {
            FileSource::Stdin
        } else {
            FileSource::Local(PathBuf::from(path))
        }
    }

    /// Whether the source is gzip-compressed (`.gz` suffix)
    pub fn is_gzip(&self) -> bool {
        match self {
            FileSource::Stdin => false,
            FileSource::Local(path) => has_gzip_suffix(path),
        }
    }

    /// Open this source and return a buffered, decompressing reader
    pub fn open(&self, buffer_size: usize) -> Result<Box<dyn Read + Send>> {
        let reader: Box<dyn Read + Send> = match self {
            FileSource::Stdin => Box::new(std::io::stdin()),
            FileSource::Local(path) => local::open_file(path)?,
        };
        Ok(local::wrap_reader(reader, self.is_gzip(), buffer_size))
    }

    /// Get a display name for logging
    pub fn display_name(&self) -> String {
        match self {
            FileSource::Stdin => "<stdin>".to_string(),
            FileSource::Local(path) => path.display().to_string(),
        }
    }
}

/// Where records are written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSink {
    /// Standard output
    Stdout,
    /// Local filesystem path (created or truncated)
    Local(PathBuf),
}

impl FileSink {
    /// Parse a path argument; `-` selects standard output
    pub fn parse(path: &str) -> Self {
        if path == STDIO_PATH {
            FileSink::Stdout
        } else {
            FileSink::Local(PathBuf::from(path))
        }
    }

    /// Whether output is gzip-compressed (`.gz` suffix)
    pub fn is_gzip(&self) -> bool {
        match self {
            FileSink::Stdout => false,
            FileSink::Local(path) => has_gzip_suffix(path),
        }
    }

    /// Create the sink and return a buffered, compressing writer
    ///
    /// Call [`OutputWriter::finish`] to flush buffers and write the gzip trailer.
    pub fn create(&self, buffer_size: usize) -> Result<OutputWriter> {
        let writer: Box<dyn Write + Send> = match self {
            FileSink::Stdout => Box::new(std::io::stdout()),
            FileSink::Local(path) => local::create_file(path)?,
        };
        Ok(OutputWriter::new(writer, self.is_gzip(), buffer_size))
    }

    /// Get a display name for logging
    pub fn display_name(&self) -> String {
        match self {
            FileSink::Stdout => "<stdout>".to_string(),
            FileSink::Local(path) => path.display().to_string(),
        }
    }
}
