//! Database driver seam
//!
//! The gateway never owns a connection. It talks to the database through
//! the [`Driver`] trait; a concrete adapter (see [`mysql`]) implements it
//! over a pooled client and stays responsible for connection
//! acquisition and release.

pub mod mysql;
pub mod reply;
pub mod row;

pub use mysql::MySqlDriver;
pub use reply::{OperationMetadata, RawReply};
pub use row::{Row, Value};

use async_trait::async_trait;
use thiserror::Error;

/// Driver-level errors
#[derive(Error, Debug)]
pub enum DriverError {
    /// Server-reported SQL error (syntax error, constraint violation, ...)
    #[error("SQL error {code}: {message}")]
    Sql { code: u16, message: String },

    /// Connection acquisition or transport failure
    #[error("connection error: {0}")]
    Connection(String),

    /// Standard IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unexpected wire reply
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Result type for driver operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Database access seam.
///
/// One operation: execute a statement and hand back the raw reply. Any
/// database-level failure surfaces as an error; the caller folds it into
/// its own response contract.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Execute one statement and return the raw reply
    async fn execute(&self, query: &str) -> DriverResult<RawReply>;
}
