use std::fs::{self, File};
use std::path::Path;

pub const SOURCE_NOT_REGULAR_FILE: &str = "Source must be a regular file.";
pub const SOURCE_NOT_READABLE: &str = "Source must be readable.";
pub const DESTINATION_IS_DIRECTORY: &str = "Destination cannot be directory.";

/// A violated argument check. Raised before any stream is opened and never wraps a cause.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PreconditionError {
    message: &'static str,
}

impl PreconditionError {
    pub fn new(message: &'static str) -> Self {
        PreconditionError { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Fails with `message` unless `check` holds for `argument`.
pub fn check_argument<T: ?Sized>(
    argument: &T,
    check: impl FnOnce(&T) -> bool,
    message: &'static str,
) -> Result<(), PreconditionError> {
    if check(argument) {
        Ok(())
    } else {
        Err(PreconditionError::new(message))
    }
}

/// True for an existing regular file. Symlinks are followed.
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// True if the current process may open `path` for reading.
/// The handle is dropped right away, nothing is read.
pub fn is_readable(path: &Path) -> bool {
    File::open(path).is_ok()
}

pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Runs the source and destination checks in order, stopping at the first failure.
pub fn check_paths(source: &Path, destination: &Path) -> Result<(), PreconditionError> {
    check_paths_with(source, destination, is_readable)
}

fn check_paths_with(
    source: &Path,
    destination: &Path,
    readable: impl FnOnce(&Path) -> bool,
) -> Result<(), PreconditionError> {
    check_argument(source, is_regular_file, SOURCE_NOT_REGULAR_FILE)?;
    check_argument(source, readable, SOURCE_NOT_READABLE)?;
    check_argument(destination, |p| !is_directory(p), DESTINATION_IS_DIRECTORY)?;
    Ok(())
}
