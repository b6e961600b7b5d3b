//! Procedure call string handling
//!
//! A procedure invocation arrives as a textual `CALL name(args)`
//! statement. This module decides whether such a string is syntactically
//! acceptable and free of denied constructs, and normalizes it before it
//! reaches the driver.

pub mod sanitizer;
pub mod validator;

pub use sanitizer::sanitize;
pub use validator::{extract_procedure_name, is_safe_call, is_valid_call};
