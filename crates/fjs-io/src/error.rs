//! Error types for fjs-io.

use fjs_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur when reading or writing shop collections.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("binary record error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("unexpected header {found:?}, expected {expected:?}")]
    Header {
        expected: String,
        found:    String,
    },

    #[error("binary stream of {len} bytes is not a whole number of {record_size}-byte records")]
    Truncated {
        len:         usize,
        record_size: usize,
    },
}

impl IoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IoError::Io(_) => ErrorKind::Io,
            IoError::Csv(e) if e.is_io_error() => ErrorKind::Io,
            IoError::Csv(_)
            | IoError::Binary(_)
            | IoError::Header { .. }
            | IoError::Truncated { .. } => ErrorKind::MalformedInput,
        }
    }
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
