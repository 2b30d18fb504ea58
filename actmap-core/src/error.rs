//! Errors in the library.
use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum HeatmapError {
    /// The input or output file could not be accessed.
    #[error("Cannot access {path:?}: {source}")]
    FileAccess {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// File content does not match the shape of an observation record.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// No observations were given.
    #[error("Empty input: the record holds no observations")]
    EmptyInput,

    /// An observation lies outside of the domain of the matrix.
    #[error("Index out of range: {what} = {value} is outside of [{lower}, {upper}]")]
    IndexOutOfRange {
        /// Which index was out of range, `frameskip` or `action`.
        what: &'static str,
        /// The offending value.
        value: i64,
        /// Lower bound of the domain (inclusive).
        lower: i64,
        /// Upper bound of the domain (inclusive).
        upper: i64,
    },

    /// The two sequences of an observation stream differ in length.
    #[error("Length mismatch: {frameskips} frameskips, {actions} actions")]
    LengthMismatch {
        /// Number of frameskip values.
        frameskips: usize,
        /// Number of action values.
        actions: usize,
    },

    /// The matrix would exceed [`MAX_MATRIX_CELLS`](crate::matrix::MAX_MATRIX_CELLS).
    #[error("Matrix too large: {rows} x {cols} cells exceed the limit of {limit}")]
    MatrixTooLarge {
        /// Number of frameskip rows.
        rows: usize,
        /// Number of action columns.
        cols: usize,
        /// Largest number of cells of a matrix.
        limit: usize,
    },

    /// A record could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A rendering backend failed.
    #[error("Render error: {0}")]
    Render(String),
}

impl HeatmapError {
    /// Process exit code associated with the error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileAccess { .. } => 2,
            Self::Deserialization(_) => 3,
            Self::EmptyInput => 4,
            Self::IndexOutOfRange { .. }
            | Self::LengthMismatch { .. }
            | Self::MatrixTooLarge { .. } => 5,
            Self::Serialization(_) | Self::Render(_) => 1,
        }
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
