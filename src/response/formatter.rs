//! Response formatter
//!
//! Bridges the driver's raw reply into the normalized contract. Every
//! entry point is total: a reply whose shape does not match the expected
//! execution mode becomes an execution-error response, never a panic or
//! a propagated error.

use crate::driver::{OperationMetadata, RawReply, Row};

use super::status::StatusCode;
use super::types::{FeedbackRow, NormalizedResponse};

const MSG_GENERIC_OK: &str = "Procedure executed successfully";
const MSG_GENERIC_ERR: &str = "Procedure execution error";

/// Format a three-part (`Generic`) reply.
///
/// The feedback row, when present, is the sole authority on
/// procedure-level success: `error_id == 0` means success and the
/// feedback message is surfaced verbatim. With no feedback row the call
/// is reported successful unconditionally; reaching the formatter means
/// no execution exception was raised, and callers' procedures rely on
/// that rule.
pub fn format_generic(reply: RawReply) -> NormalizedResponse<Vec<Row>> {
    let (data, feedback_rows, meta) = match reply {
        RawReply::ThreePart {
            data,
            feedback,
            meta,
        } => (data, feedback, meta),
        other => return shape_mismatch("three-part", &other),
    };

    let feedback = feedback_rows.first().map(FeedbackRow::from_row);
    let success = match &feedback {
        Some(f) => f.error_id == 0,
        None => true,
    };
    let message = match &feedback {
        Some(f) => f.message.clone(),
        None => {
            if success {
                MSG_GENERIC_OK.to_string()
            } else {
                MSG_GENERIC_ERR.to_string()
            }
        }
    };
    let record_count = data.len() as u64;

    NormalizedResponse {
        success,
        status_code: if success {
            StatusCode::Success
        } else {
            StatusCode::ProcedureError
        },
        message,
        data: Some(data),
        feedback,
        operation_result: Some(meta),
        record_count,
    }
}

/// Format a flat row-set (`DataOnly`) reply.
///
/// By construction this mode cannot represent a procedure-level failure;
/// only an execution exception, handled upstream, signals one.
pub fn format_data_only(reply: RawReply) -> NormalizedResponse<Vec<Row>> {
    let rows = match reply {
        RawReply::RowSet(rows) => rows,
        other => return shape_mismatch("row set", &other),
    };

    let record_count = rows.len() as u64;
    NormalizedResponse {
        success: true,
        status_code: StatusCode::Success,
        message: MSG_GENERIC_OK.to_string(),
        data: Some(rows),
        feedback: None,
        operation_result: None,
        record_count,
    }
}

/// Format a metadata-only (`Modify`) reply. Success means at least one
/// row was affected; zero affected rows reports not-found.
pub fn format_modify(reply: RawReply) -> NormalizedResponse<OperationMetadata> {
    let meta = match reply {
        RawReply::Metadata(meta) => meta,
        other => return shape_mismatch("metadata", &other),
    };

    let affected = meta.affected_rows;
    let success = affected > 0;
    let message = if success {
        format!("{} row(s) affected", affected)
    } else {
        "no rows affected".to_string()
    };

    NormalizedResponse {
        success,
        status_code: if success {
            StatusCode::Success
        } else {
            StatusCode::NotFound
        },
        message,
        data: Some(meta.clone()),
        feedback: None,
        operation_result: Some(meta),
        record_count: affected,
    }
}

/// Build a failure response from an error caught anywhere upstream:
/// validation failure, driver exception, or reply shape mismatch.
pub fn format_error<T>(message: impl Into<String>, status_code: StatusCode) -> NormalizedResponse<T> {
    NormalizedResponse {
        success: false,
        status_code,
        message: message.into(),
        data: None,
        feedback: None,
        operation_result: None,
        record_count: 0,
    }
}

/// Mismatch between the expected reply shape and what the driver sent.
/// The payload is present but empty, unlike [`format_error`] where it is
/// absent.
fn shape_mismatch<T: Default>(expected: &str, got: &RawReply) -> NormalizedResponse<T> {
    NormalizedResponse {
        success: false,
        status_code: StatusCode::ExecutionError,
        message: format!(
            "could not interpret procedure reply: expected {} shape, got {}",
            expected,
            got.shape()
        ),
        data: Some(T::default()),
        feedback: None,
        operation_result: None,
        record_count: 0,
    }
}
