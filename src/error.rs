use thiserror::Error;

use crate::types::Value;

/// Convenience result type for selection and loading operations.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by every fallible operation in this crate.
///
/// Selection failures never produce partial results: a missing label or a mis-sized mask yields
/// an error, never a best-effort container or a [`Value::Null`].
#[derive(Debug, Error)]
pub enum TableError {
    /// A requested label has no match on the axis it was looked up on.
    #[error("label not found: {key}")]
    KeyNotFound { key: Value },

    /// A boolean mask (or label vector) length disagrees with the axis it applies to.
    #[error("dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A loaded record has a different field count than the header.
    #[error("malformed input at line {line}: expected {expected} fields, found {found}")]
    MalformedInput {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A key expression mixes kinds in a way the selection engine cannot interpret.
    #[error("malformed key: {message}")]
    MalformedKey { message: String },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV syntax error reported by the reader.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl TableError {
    pub(crate) fn key_not_found(key: &Value) -> Self {
        TableError::KeyNotFound { key: key.clone() }
    }
}
