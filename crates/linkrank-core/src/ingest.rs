//! Record-level edge ingestion with validation.
//!
//! # Overview
//!
//! The collector hands the engine raw records that may be malformed (a
//! source with no target). Malformed records are rejected individually —
//! the batch continues with the remaining valid pairs, and the rejections
//! are reported so callers can warn without failing the run.
//!
//! Accepted pairs pass through verbatim: no trimming, no canonicalization,
//! no content validation. Empty strings are valid identifiers.

use std::io::BufRead;

use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::graph::GraphBuilder;

/// A raw edge record as produced by a collector.
///
/// `target: None` models a truncated record (e.g. a dangling source with
/// nothing after the delimiter was ever written).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Source identifier.
    pub source: String,
    /// Target identifier, absent when the record is malformed.
    pub target: Option<String>,
}

/// Outcome of ingesting a batch of records.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Records inserted into the graph (duplicates still count as accepted).
    pub accepted: usize,
    /// Records rejected by validation.
    pub rejected: usize,
    /// One error per rejected record, in batch order.
    pub errors: Vec<Error>,
}

impl IngestReport {
    /// True when every record in the batch was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected == 0
    }
}

/// Ingest a batch of edge records into `builder`.
///
/// Each record with a present target becomes a directed edge (endpoints
/// created implicitly, duplicates deduplicated by the builder). A record
/// with a missing target is rejected with [`Error::MissingTarget`] carrying
/// its 1-based batch position; ingestion continues with the next record.
#[instrument(skip(builder, records))]
pub fn ingest_records<I>(builder: &mut GraphBuilder, records: I) -> IngestReport
where
    I: IntoIterator<Item = EdgeRecord>,
{
    let mut report = IngestReport::default();

    for (i, record) in records.into_iter().enumerate() {
        let line = i + 1;
        match record.target {
            Some(target) => {
                builder.add_edge(&record.source, &target);
                report.accepted += 1;
            }
            None => {
                warn!(line, source = %record.source, "rejecting edge record with missing target");
                report.rejected += 1;
                report.errors.push(Error::MissingTarget { line });
            }
        }
    }

    debug!(
        accepted = report.accepted,
        rejected = report.rejected,
        "ingest batch complete"
    );

    report
}

/// Split a delimited text line into an [`EdgeRecord`].
///
/// Splits on the **first** occurrence of `delimiter`; a line with no
/// delimiter yields a record with `target: None`. Fields are not trimmed —
/// `"a,"` produces the valid empty-string target.
#[must_use]
pub fn parse_edge_line(line: &str, delimiter: char) -> EdgeRecord {
    match line.split_once(delimiter) {
        Some((source, target)) => EdgeRecord {
            source: source.to_string(),
            target: Some(target.to_string()),
        },
        None => EdgeRecord {
            source: line.to_string(),
            target: None,
        },
    }
}

/// Ingest delimited edge lines from a reader.
///
/// One record per line; blank lines are skipped. Validation failures are
/// collected in the report; only I/O failures abort.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading from `reader` fails.
#[instrument(skip(builder, reader))]
pub fn ingest_delimited<R: BufRead>(
    builder: &mut GraphBuilder,
    reader: R,
    delimiter: char,
) -> Result<IngestReport> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        records.push(parse_edge_line(&line, delimiter));
    }
    Ok(ingest_records(builder, records))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
