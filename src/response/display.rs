//! Diagnostic rendering of normalized responses
//!
//! Produces a deterministic multi-section textual dump for logs and
//! debugging. Not a machine-parseable format.

use std::fmt::Write;

use crate::driver::{OperationMetadata, Row};

use super::types::NormalizedResponse;

/// Payloads that know how to render themselves into the data section
pub trait RenderData {
    /// Append the payload's data section body to `out`
    fn render(&self, out: &mut String);

    /// Whether there is anything worth printing
    fn is_empty_data(&self) -> bool;
}

impl RenderData for Vec<Row> {
    fn render(&self, out: &mut String) {
        for (i, row) in self.iter().enumerate() {
            let _ = write!(out, "  [{}]", i);
            for (name, value) in row.iter() {
                let _ = write!(out, " {}={}", name, value);
            }
            out.push('\n');
        }
    }

    fn is_empty_data(&self) -> bool {
        self.is_empty()
    }
}

impl RenderData for OperationMetadata {
    fn render(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "  affected_rows={} insert_id={} changed_rows={}",
            self.affected_rows, self.insert_id, self.changed_rows
        );
    }

    fn is_empty_data(&self) -> bool {
        false
    }
}

/// Render a normalized response as a multi-section dump: status header,
/// feedback section if present, data section if non-empty, operation
/// result section if present.
pub fn format_for_display<T: RenderData>(resp: &NormalizedResponse<T>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== {} ===", resp.status_code);
    let _ = writeln!(out, "success: {}", resp.success);
    let _ = writeln!(out, "message: {}", resp.message);
    let _ = writeln!(out, "records: {}", resp.record_count);

    if let Some(feedback) = &resp.feedback {
        let _ = writeln!(out, "--- feedback ---");
        let _ = writeln!(
            out,
            "  return_id={} error_id={} message={}",
            feedback.return_id, feedback.error_id, feedback.message
        );
    }

    if let Some(data) = &resp.data {
        if !data.is_empty_data() {
            let _ = writeln!(out, "--- data ---");
            data.render(&mut out);
        }
    }

    if let Some(meta) = &resp.operation_result {
        let _ = writeln!(out, "--- operation result ---");
        let _ = writeln!(
            out,
            "  affected_rows={} insert_id={} warnings={} info={:?}",
            meta.affected_rows, meta.insert_id, meta.warning_status, meta.info
        );
    }

    out
}
