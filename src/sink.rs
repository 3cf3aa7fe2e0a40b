use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const LINE_TERMINATOR: &[u8] = b"\n";

/// Buffered line writer over a freshly truncated destination file.
///
/// Dropping the sink closes the file; call [`LineSink::finish`] on the success
/// path so that a failing final flush is reported instead of swallowed.
pub struct LineSink {
    writer: BufWriter<File>,
}

impl LineSink {
    /// Creates `path` or truncates it if it already exists.
    pub fn create(path: &Path, buffer_capacity: usize) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(LineSink {
            writer: BufWriter::with_capacity(buffer_capacity, file),
        })
    }

    /// Writes `line` followed by a single `\n`.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(LINE_TERMINATOR)
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
