//! Error types for catalog ingestion and the pairwise reduction.
//!
//! Every failure is fatal: nothing is retried and no partial statistics are
//! reported. Errors fall into three classes, exposed through
//! [`SeparationError::kind`]:
//!
//! | Class | Variants |
//! |-------|----------|
//! | [`Configuration`](ErrorKind::Configuration) | bad worker count, bad capacity |
//! | [`InputFormat`](ErrorKind::InputFormat) | unreadable file, wrong column count, unparsable field, capacity overflow |
//! | [`Resource`](ErrorKind::Resource) | dedup-matrix allocation, worker spawn, worker panic |

use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`SeparationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or missing run configuration.
    Configuration,
    /// The catalog could not be read or is malformed.
    InputFormat,
    /// The OS refused memory or threads.
    Resource,
}

#[derive(Error, Debug)]
pub enum SeparationError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("unable to open catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `record` is the 0-based index of the record being parsed.
    #[error("line {line} (record {record}) had more than 3 columns ({found} found)")]
    TooManyColumns {
        line: usize,
        record: usize,
        found: usize,
    },

    #[error("line {line} (record {record}) is missing column {column}")]
    MissingColumn {
        line: usize,
        record: usize,
        column: usize,
    },

    #[error("line {line}: cannot parse {field} from {value:?}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("catalog exceeds capacity of {capacity} records")]
    CapacityExceeded { capacity: usize },

    #[error("could not allocate {bytes} bytes for the pair dedup matrix")]
    Allocation { bytes: u128 },

    #[error("failed to create worker thread {worker}: {source}")]
    WorkerSpawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("worker thread {worker} panicked")]
    WorkerPanicked { worker: usize },
}

impl SeparationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Io { .. }
            | Self::TooManyColumns { .. }
            | Self::MissingColumn { .. }
            | Self::InvalidField { .. }
            | Self::CapacityExceeded { .. } => ErrorKind::InputFormat,
            Self::Allocation { .. } | Self::WorkerSpawn { .. } | Self::WorkerPanicked { .. } => {
                ErrorKind::Resource
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SeparationError>;
