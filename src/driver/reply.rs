//! Raw driver reply model
//!
//! A stored procedure returns zero or more row sets followed by
//! statement metadata. The reply carries no static shape promise, so it
//! is modeled as a tagged union; the formatter checks the tag against the
//! expected execution mode at the boundary instead of trusting it.

use serde::Serialize;

use super::row::Row;

/// Driver-reported statement metadata (mirrors the MySQL OK packet)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationMetadata {
    /// Number of columns in the preceding row set
    pub field_count: u32,
    /// Rows changed, deleted or inserted by the statement
    pub affected_rows: u64,
    /// Auto-increment id assigned by the last insert
    pub insert_id: u64,
    /// Human-readable statement info string
    pub info: String,
    /// Server status flags
    pub server_status: u16,
    /// Warning count reported by the server
    pub warning_status: u16,
    /// Rows actually changed (subset of matched rows)
    pub changed_rows: u64,
}

/// Untyped reply from the driver, tagged by the shape it observed
#[derive(Debug, Clone, PartialEq)]
pub enum RawReply {
    /// Data rows, feedback rows and trailing metadata
    ThreePart {
        data: Vec<Row>,
        feedback: Vec<Row>,
        meta: OperationMetadata,
    },
    /// A single flat row set
    RowSet(Vec<Row>),
    /// Statement metadata alone, no row sets
    Metadata(OperationMetadata),
}

impl RawReply {
    /// Short shape label used in mismatch diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            RawReply::ThreePart { .. } => "three-part",
            RawReply::RowSet(_) => "row set",
            RawReply::Metadata(_) => "metadata",
        }
    }
}
