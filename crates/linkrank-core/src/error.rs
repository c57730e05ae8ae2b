//! Typed errors for the linkrank engine.
//!
//! Validation failures during ingest are per-record: the batch continues
//! past a rejected record, and the error is collected in the
//! [`crate::ingest::IngestReport`] rather than aborting the run.

use thiserror::Error;

/// Errors produced by the linkrank core.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw edge record had no target endpoint. Carries the 1-based
    /// position of the record within its batch.
    #[error("edge record {line} is missing a target endpoint")]
    MissingTarget {
        /// 1-based record position within the ingested batch.
        line: usize,
    },

    /// Reading collector output failed.
    #[error("failed to read edge input: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;
