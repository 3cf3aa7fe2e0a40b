use crate::preconditions::{check_paths, PreconditionError};
use crate::processor::{error_chain_fmt, Processor};
use crate::sink::LineSink;
use crate::source::LineSource;
use crate::transformation::Transformation;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Builds a TextFileTransformer around a transformation.
pub struct TextFileTransformerBuilder<T: Transformation> {
    transformation: T,
    buffer_capacity: usize,
}

impl<T: Transformation> TextFileTransformerBuilder<T> {
    pub fn new(transformation: T) -> Self {
        TextFileTransformerBuilder {
            transformation,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    /// Sets the size of the read and the write buffer. Zero is clamped to one byte.
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity.max(1);
        self
    }

    pub fn build(self) -> TextFileTransformer<T> {
        TextFileTransformer {
            transformation: self.transformation,
            buffer_capacity: self.buffer_capacity,
        }
    }
}

/// Rewrites a text file line by line into a destination file.
///
/// The transformer holds no state besides its transformation, so it can be reused
/// for any number of source/destination pairs, and shared between threads whenever
/// the transformation allows it. Two calls writing the same destination at the same
/// time are not coordinated.
pub struct TextFileTransformer<T: Transformation> {
    transformation: T,
    buffer_capacity: usize,
}

impl<T: Transformation> TextFileTransformer<T> {
    pub fn new(transformation: T) -> Self {
        TextFileTransformerBuilder::new(transformation).build()
    }

    pub fn builder(transformation: T) -> TextFileTransformerBuilder<T> {
        TextFileTransformerBuilder::new(transformation)
    }

    pub fn transformation(&self) -> &T {
        &self.transformation
    }

    pub fn buffer_capacity(&self) -> usize {
        self.buffer_capacity
    }

    /// Writes `transformation(line)` for every line of `source` to `destination`,
    /// each followed by `\n`, replacing whatever `destination` held before.
    ///
    /// Source and destination are validated before any file is opened:
    /// the source must be a readable regular file and the destination must not
    /// be a directory. Both files are closed before this returns, whatever the outcome.
    /// A failure halfway leaves the lines written so far in place.
    pub fn transform(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<(), TransformError> {
        let source = source.as_ref();
        let destination = destination.as_ref();
        let span = tracing::debug_span!(
            "transform",
            source = %source.display(),
            destination = %destination.display()
        );
        let _entered = span.enter();

        if let Err(e) = check_paths(source, destination) {
            debug!(reason = e.message(), "precondition failed");
            return Err(e.into());
        }

        let reader = LineSource::open(source, self.buffer_capacity)?;
        let writer = LineSink::create(destination, self.buffer_capacity)?;
        let lines = Processor::new(reader, &self.transformation, writer).process()?;

        debug!(lines, "transform finished");
        Ok(())
    }
}

#[derive(thiserror::Error)]
pub enum TransformError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Raised by the transformation itself, passed through as is.
    #[error(transparent)]
    Transformation(anyhow::Error),
}

impl TransformError {
    pub fn is_precondition(&self) -> bool {
        matches!(self, TransformError::Precondition(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, TransformError::Io(_))
    }

    pub fn is_transformation(&self) -> bool {
        matches!(self, TransformError::Transformation(_))
    }
}

impl std::fmt::Debug for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
