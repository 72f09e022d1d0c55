/*! Corpus file writers.

[JsonWriter] serializes records into line-delimited JSON, [TextWriter] emits
plain text lines with optional blank separator lines. Both compress their
output when the destination path carries a `.gz` extension, and both need an
explicit [JsonWriter::finish]/[TextWriter::finish] call so that the gzip
stream is properly terminated.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

use crate::error::Error;

enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Sink {
    fn from_path(dst: &Path) -> Result<Self, Error> {
        let file = BufWriter::new(File::create(dst)?);
        if dst.extension().map_or(false, |ext| ext == "gz") {
            Ok(Sink::Gzip(GzEncoder::new(file, Compression::default())))
        } else {
            Ok(Sink::Plain(file))
        }
    }

    fn finish(&mut self) -> Result<(), Error> {
        match self {
            Sink::Plain(w) => w.flush()?,
            Sink::Gzip(w) => {
                w.try_finish()?;
                w.get_mut().flush()?;
            }
        }

        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Sink::Plain(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
        }
    }
}

/// Writer of line-delimited JSON records.
pub struct JsonWriter {
    sink: Sink,
}

impl JsonWriter {
    /// Creates the destination file, `.gz` aware.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            sink: Sink::from_path(dst)?,
        })
    }

    /// Serializes `record` and writes it followed by a newline.
    ///
    /// Non-ASCII text is written as-is, not `\u` escaped.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<(), Error> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Flushes buffers and terminates the gzip stream.
    pub fn finish(&mut self) -> Result<(), Error> {
        self.sink.finish()
    }
}

/// Writer of plain text lines.
pub struct TextWriter {
    sink: Sink,
}

impl TextWriter {
    /// Creates the destination file, `.gz` aware.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            sink: Sink::from_path(dst)?,
        })
    }

    /// Writes `line` followed by a newline.
    pub fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Writes a blank separator line.
    pub fn write_break(&mut self) -> Result<(), Error> {
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Flushes buffers and terminates the gzip stream.
    pub fn finish(&mut self) -> Result<(), Error> {
        self.sink.finish()
    }
}
