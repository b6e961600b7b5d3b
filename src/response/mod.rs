//! Response normalization
//!
//! Converts the driver's raw multi-resultset replies, or a caught error,
//! into the one uniform success/error contract every consumer of this
//! subsystem sees.

pub mod display;
pub mod formatter;
pub mod legacy;
pub mod status;
pub mod types;

pub use display::format_for_display;
pub use formatter::{format_data_only, format_error, format_generic, format_modify};
pub use legacy::{to_legacy_shape, LegacyResult};
pub use status::StatusCode;
pub use types::{ExecutionMode, FeedbackRow, NormalizedResponse};
