//! Local filesystem readers and writers with optional gzip

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Open a local file for reading
pub(crate) fn open_file(path: &Path) -> Result<Box<dyn Read + Send>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    tracing::debug!("Opened input file: {}", path.display());
    Ok(Box::new(file))
}

/// Create (or truncate) a local file for writing
pub(crate) fn create_file(path: &Path) -> Result<Box<dyn Write + Send>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    tracing::debug!("Created output file: {}", path.display());
    Ok(Box::new(file))
}

/// Buffer a raw reader, decompressing gzip members when requested
pub(crate) fn wrap_reader(
    reader: Box<dyn Read + Send>,
    gzip: bool,
    buffer_size: usize,
) -> Box<dyn Read + Send> {
    let buffered = BufReader::with_capacity(buffer_size, reader);
    if gzip {
        // Concatenated gzip members are read as one stream.
        Box::new(BufReader::with_capacity(
            buffer_size,
            MultiGzDecoder::new(buffered),
        ))
    } else {
        Box::new(buffered)
    }
}

/// Buffered writer that optionally gzip-compresses its output
pub enum OutputWriter {
    Plain(BufWriter<Box<dyn Write + Send>>),
    Gzip(GzEncoder<BufWriter<Box<dyn Write + Send>>>),
}

impl OutputWriter {
    pub(crate) fn new(writer: Box<dyn Write + Send>, gzip: bool, buffer_size: usize) -> Self {
        let buffered = BufWriter::with_capacity(buffer_size, writer);
        if gzip {
            OutputWriter::Gzip(GzEncoder::new(buffered, Compression::default()))
        } else {
            OutputWriter::Plain(buffered)
        }
    }

    /// Flush all buffered data and finish the gzip stream if any
    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputWriter::Plain(mut writer) => writer.flush(),
            OutputWriter::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputWriter::Plain(writer) => writer.write(buf),
            OutputWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputWriter::Plain(writer) => writer.flush(),
            OutputWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}
