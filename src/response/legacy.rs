//! Legacy result shape
//!
//! Pre-existing callers consume an older flat result. The normalized
//! contract stays canonical; this adapter is a one-way pure projection
//! kept in a single place so old-format consumers never spread the shape
//! further.

use serde::Serialize;

use crate::driver::Row;

use super::status::StatusCode;
use super::types::NormalizedResponse;

/// Flat result shape used by pre-existing callers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyResult {
    /// Same taxonomy as the normalized response
    pub status_code: StatusCode,
    /// Outcome message
    pub message: String,
    /// Feedback return id, or an id-like column of the first row, or 0
    pub record_id: i64,
    /// The data rows
    pub data: Vec<Row>,
    /// Number of records
    pub quantity: u64,
}

/// Project a normalized row-set response into the legacy shape.
pub fn to_legacy_shape(resp: NormalizedResponse<Vec<Row>>) -> LegacyResult {
    let record_id = match &resp.feedback {
        Some(feedback) => feedback.return_id,
        None => resp
            .data
            .as_deref()
            .and_then(|rows| rows.first())
            .and_then(first_row_id)
            .unwrap_or(0),
    };

    LegacyResult {
        status_code: resp.status_code,
        message: resp.message,
        record_id,
        data: resp.data.unwrap_or_default(),
        quantity: resp.record_count,
    }
}

/// Conventional id-like columns, most specific name first.
fn first_row_id(row: &Row) -> Option<i64> {
    for name in ["id", "record_id", "return_id"] {
        if let Some(id) = row.get_named(name).and_then(|v| v.as_i64()) {
            return Some(id);
        }
    }
    None
}
