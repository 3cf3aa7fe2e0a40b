//! Line-by-line text file transformation.
//!
//! A [`TextFileTransformer`] reads a UTF-8 source file, applies a [`Transformation`]
//! to every line and writes the results, one per line, to a destination file.

pub mod preconditions;
mod processor;
pub mod sink;
pub mod source;
pub mod telemetry;
pub mod transformation;
pub mod transformer;

pub use preconditions::PreconditionError;
pub use transformation::{Fallible, Identity, LowerCase, Transformation, UpperCase};
pub use transformer::{TextFileTransformer, TextFileTransformerBuilder, TransformError};
