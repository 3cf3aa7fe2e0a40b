use crate::sink::LineSink;
use crate::source::LineSource;
use crate::transformation::Transformation;
use crate::transformer::TransformError;
use tracing::trace;

/// Handles the actual line processing for a single transform call.
/// Owns both ends of the pipeline, so every exit path drops (and closes) them.
pub(crate) struct Processor<'t, T: Transformation + ?Sized> {
    source: LineSource,
    transformation: &'t T,
    sink: LineSink,
}

impl<'t, T: Transformation + ?Sized> Processor<'t, T> {
    pub(crate) fn new(source: LineSource, transformation: &'t T, sink: LineSink) -> Self {
        Processor {
            source,
            transformation,
            sink,
        }
    }

    /// Reads every line from the source, transforms it and writes it to the sink in order.
    /// Returns the number of lines written.
    pub(crate) fn process(self) -> Result<usize, TransformError> {
        let Processor {
            source,
            transformation,
            mut sink,
        } = self;

        let mut written = 0;
        for line in source {
            let line = line?;
            let out = transformation
                .apply(&line)
                .map_err(TransformError::Transformation)?;
            sink.write_line(&out)?;
            written += 1;
            trace!(line = written, "line written");
        }
        sink.finish()?;
        Ok(written)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformation::{Fallible, UpperCase};
    use anyhow::anyhow;
    use std::fs;

    fn open(dir: &std::path::Path, content: &str) -> (LineSource, LineSink) {
        let source = dir.join("in.txt");
        fs::write(&source, content).unwrap();
        (
            LineSource::open(&source, 64).unwrap(),
            LineSink::create(&dir.join("out.txt"), 64).unwrap(),
        )
    }

    #[test]
    fn counts_written_lines() {
        let dir = tempfile::tempdir().unwrap();
        let (source, sink) = open(dir.path(), "a\nb\n");

        let written = Processor::new(source, &UpperCase, sink).process().unwrap();

        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "A\nB\n");
    }

    #[test]
    fn transformation_error_keeps_its_kind() {
        let dir = tempfile::tempdir().unwrap();
        let (source, sink) = open(dir.path(), "a\nb\n");
        let fail_on_b = Fallible(|line: &str| -> anyhow::Result<String> {
            if line == "b" {
                return Err(anyhow!("no b"));
            }
            Ok(line.to_owned())
        });

        let err = Processor::new(source, &fail_on_b, sink).process().unwrap_err();

        assert!(err.is_transformation());
        assert_eq!(err.to_string(), "no b");
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "a\n");
    }

    #[test]
    fn read_error_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.txt");
        fs::write(&source, b"ok\n\xff\n").unwrap();
        let source = LineSource::open(&source, 64).unwrap();
        let sink = LineSink::create(&dir.path().join("out.txt"), 64).unwrap();

        let err = Processor::new(source, &UpperCase, sink).process().unwrap_err();

        match err {
            TransformError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
