use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Lazy, one-pass reader yielding the lines of a UTF-8 text file.
///
/// Terminators (`\n` or `\r\n`) are stripped. Invalid UTF-8 surfaces as an
/// `io::Error` of kind `InvalidData`. The file handle closes when the source is dropped.
pub struct LineSource {
    lines: Lines<BufReader<File>>,
}

impl LineSource {
    pub fn open(path: &Path, buffer_capacity: usize) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(LineSource {
            lines: BufReader::with_capacity(buffer_capacity, file).lines(),
        })
    }
}

impl Iterator for LineSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}
