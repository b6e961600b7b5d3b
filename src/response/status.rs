//! Status code taxonomy
//!
//! Stable part of the response contract. Serialized as the numeric code.

use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;

/// Response status taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// Feedback absent or error id zero; data-only reply; modify with rows affected
    Success,
    /// Feedback present with a non-zero error id
    ProcedureError,
    /// Call string failed the syntax or safety check
    ValidationError,
    /// Driver threw, or the raw reply did not match the expected shape
    ExecutionError,
    /// Modify call affected no rows
    NotFound,
    /// Caller-supplied timeout exceeds the ceiling (validation-time only)
    Timeout,
}

impl StatusCode {
    /// Numeric code exposed on the wire
    pub const fn code(self) -> u16 {
        match self {
            StatusCode::Success => 200,
            StatusCode::ProcedureError => 422,
            StatusCode::ValidationError => 400,
            StatusCode::ExecutionError => 500,
            StatusCode::NotFound => 404,
            StatusCode::Timeout => 408,
        }
    }

    /// Upper-case label used in diagnostics
    pub const fn label(self) -> &'static str {
        match self {
            StatusCode::Success => "SUCCESS",
            StatusCode::ProcedureError => "PROCEDURE_ERROR",
            StatusCode::ValidationError => "VALIDATION_ERROR",
            StatusCode::ExecutionError => "EXECUTION_ERROR",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::Timeout => "TIMEOUT",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.code())
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}
