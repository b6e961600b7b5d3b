//! procgate - stored-procedure execution gateway
//!
//! Accepts `CALL procedure(args)` invocation strings, validates and
//! sanitizes them, executes them through a pluggable database driver,
//! and normalizes the driver's raw multi-resultset replies into a single
//! uniform response contract.

pub mod call;
pub mod driver;
pub mod exec;
pub mod response;
