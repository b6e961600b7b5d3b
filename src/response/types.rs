//! Response contract types

use serde::Serialize;

use crate::driver::{OperationMetadata, Row};

use super::status::StatusCode;

/// How a procedure's reply is expected to be shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExecutionMode {
    /// Three-part reply: data rows, feedback rows, operation metadata
    Generic,
    /// A flat row array only
    DataOnly,
    /// Operation metadata with an affected-row count
    Modify,
}

/// Convention-based procedure feedback: some procedures emit a single-row
/// result set reporting a return id, message and error id alongside their
/// data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRow {
    /// Procedure-level return id (commonly the affected record's id)
    pub return_id: i64,
    /// Procedure-level message
    pub message: String,
    /// Zero means success; anything else is a procedure-level failure
    pub error_id: i64,
}

impl FeedbackRow {
    /// Decode a feedback row from a driver row.
    ///
    /// Fields are looked up by their conventional names; a column the
    /// procedure did not alias decodes to its zero value.
    pub fn from_row(row: &Row) -> Self {
        FeedbackRow {
            return_id: row.get_named("return_id").and_then(|v| v.as_i64()).unwrap_or(0),
            message: row
                .get_named("message")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            error_id: row.get_named("error_id").and_then(|v| v.as_i64()).unwrap_or(0),
        }
    }
}

/// The single uniform contract produced by this subsystem regardless of
/// which procedure or execution mode was used. Immutable once built; the
/// sole artifact crossing the component boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResponse<T> {
    /// Whether the invocation succeeded end to end
    pub success: bool,
    /// Status taxonomy entry; success implies [`StatusCode::Success`]
    pub status_code: StatusCode,
    /// Human-readable outcome message
    pub message: String,
    /// Mode-dependent payload; None when the call never produced one
    pub data: Option<T>,
    /// Feedback row, when the procedure emitted one
    pub feedback: Option<FeedbackRow>,
    /// Driver statement metadata, when the reply carried it
    pub operation_result: Option<OperationMetadata>,
    /// Data row count, or the affected-row count for modify calls
    pub record_count: u64,
}
