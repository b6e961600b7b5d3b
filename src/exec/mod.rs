//! Procedure execution service
//!
//! Orchestrates one invocation: validate the call string, sanitize it,
//! hand it to the driver, and normalize the reply. Every failure along
//! the way folds into the normalized response; nothing propagates to the
//! caller as an error.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::call::{extract_procedure_name, is_safe_call, is_valid_call, sanitize};
use crate::driver::{Driver, OperationMetadata, Row};
use crate::response::formatter::{
    format_data_only, format_error, format_generic, format_modify,
};
use crate::response::{ExecutionMode, NormalizedResponse, StatusCode};

/// Hard ceiling for a caller-supplied execution timeout. Checked by the
/// dry-run validation path only; no runtime timeout is enforced here.
pub const MAX_EXECUTION_TIMEOUT: Duration = Duration::from_secs(300);

/// Dry-run validation outcome
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Call string begins with the `CALL` keyword
    pub is_valid: bool,
    /// Call string passes the deny-list scan
    pub is_safe: bool,
    /// Extracted procedure name, when one could be found
    pub procedure_name: Option<String>,
    /// Human-readable descriptions of every failed check
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// True when every check passed
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a call string without touching any driver.
pub fn validate_call(call: &str) -> ValidationReport {
    validate_call_with_timeout(call, None)
}

/// Validate a call string and, when supplied, a caller-configured
/// execution timeout. The timeout must be positive and must not exceed
/// [`MAX_EXECUTION_TIMEOUT`].
pub fn validate_call_with_timeout(call: &str, timeout: Option<Duration>) -> ValidationReport {
    let is_valid = is_valid_call(call);
    let is_safe = is_safe_call(call);
    let procedure_name = extract_procedure_name(call).map(str::to_string);

    let mut errors = Vec::new();
    if !is_valid {
        errors.push("call must start with the CALL keyword".to_string());
    } else if procedure_name.is_none() {
        errors.push("no procedure name found after CALL".to_string());
    }
    if !is_safe {
        errors.push("call contains a denied keyword or comment marker".to_string());
    }
    if let Some(timeout) = timeout {
        if timeout.is_zero() {
            errors.push("execution timeout must be positive".to_string());
        } else if timeout > MAX_EXECUTION_TIMEOUT {
            errors.push(format!(
                "execution timeout exceeds the {}s ceiling",
                MAX_EXECUTION_TIMEOUT.as_secs()
            ));
        }
    }

    ValidationReport {
        is_valid,
        is_safe,
        procedure_name,
        errors,
    }
}

/// The orchestrating component. Holds no state beyond the injected
/// driver; concurrent invocations are fully independent.
pub struct ProcedureExecutor {
    /// Driver collaborator, injected at construction
    driver: Arc<dyn Driver>,
}

impl ProcedureExecutor {
    /// Create an executor over a driver
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        ProcedureExecutor { driver }
    }

    /// Execute a procedure expected to return a three-part reply:
    /// data rows, feedback rows and operation metadata.
    ///
    /// The only path that also runs the safety check.
    pub async fn execute_generic(&self, call: &str) -> NormalizedResponse<Vec<Row>> {
        let sanitized = match self.precheck(call, ExecutionMode::Generic) {
            Ok(sanitized) => sanitized,
            Err(message) => return format_error(message, StatusCode::ValidationError),
        };

        match self.driver.execute(&sanitized).await {
            Ok(reply) => format_generic(reply),
            Err(e) => {
                warn!(error = %e, "driver execution failed");
                format_error(e.to_string(), StatusCode::ExecutionError)
            }
        }
    }

    /// Execute a procedure expected to return a flat row array.
    pub async fn execute_data_only(&self, call: &str) -> NormalizedResponse<Vec<Row>> {
        let sanitized = match self.precheck(call, ExecutionMode::DataOnly) {
            Ok(sanitized) => sanitized,
            Err(message) => return format_error(message, StatusCode::ValidationError),
        };

        match self.driver.execute(&sanitized).await {
            Ok(reply) => format_data_only(reply),
            Err(e) => {
                warn!(error = %e, "driver execution failed");
                format_error(e.to_string(), StatusCode::ExecutionError)
            }
        }
    }

    /// Execute a procedure expected to return operation metadata with an
    /// affected-row count.
    pub async fn execute_modify(&self, call: &str) -> NormalizedResponse<OperationMetadata> {
        let sanitized = match self.precheck(call, ExecutionMode::Modify) {
            Ok(sanitized) => sanitized,
            Err(message) => return format_error(message, StatusCode::ValidationError),
        };

        match self.driver.execute(&sanitized).await {
            Ok(reply) => format_modify(reply),
            Err(e) => {
                warn!(error = %e, "driver execution failed");
                format_error(e.to_string(), StatusCode::ExecutionError)
            }
        }
    }

    /// Dry-run validation; never touches the driver.
    pub fn validate_only(&self, call: &str) -> ValidationReport {
        validate_call(call)
    }

    /// Dry-run validation including a caller-supplied timeout.
    pub fn validate_only_with_timeout(
        &self,
        call: &str,
        timeout: Option<Duration>,
    ) -> ValidationReport {
        validate_call_with_timeout(call, timeout)
    }

    /// Run the pre-execution checks and sanitize the call. The safety
    /// scan runs on the generic path only; the data-only and modify
    /// paths validate syntax alone.
    fn precheck(&self, call: &str, mode: ExecutionMode) -> Result<String, String> {
        if !is_valid_call(call) {
            warn!(?mode, "rejected call: invalid syntax");
            return Err("invalid call syntax".to_string());
        }
        if mode == ExecutionMode::Generic && !is_safe_call(call) {
            warn!(?mode, "rejected call: denied construct");
            return Err("unsafe call".to_string());
        }

        let sanitized = sanitize(call);
        debug!(
            procedure = extract_procedure_name(&sanitized).unwrap_or("?"),
            ?mode,
            "executing procedure"
        );
        Ok(sanitized)
    }
}
