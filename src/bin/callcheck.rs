//! Call string validation tool
//!
//! Usage: callcheck [--timeout-secs N] "CALL sp_name(args)"
//!
//! Runs the dry-run validation path against a call string and prints the
//! report. Never touches a database.
//!
//! Exit codes:
//!   0 - call is valid and safe
//!   1 - validation failed

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use procgate::call::sanitize;
use procgate::exec::validate_call_with_timeout;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate a stored-procedure call string")]
struct Cli {
    /// The call string, e.g. "CALL sp_get_products(1)"
    call: String,

    /// Optional execution timeout to validate, in seconds
    #[arg(long, env = "PROCGATE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Cli { call, timeout_secs } = Cli::parse();
    let timeout = timeout_secs.map(Duration::from_secs);

    let report = validate_call_with_timeout(&call, timeout);

    println!("valid:     {}", report.is_valid);
    println!("safe:      {}", report.is_safe);
    match &report.procedure_name {
        Some(name) => println!("procedure: {}", name),
        None => println!("procedure: <none>"),
    }
    if report.is_ok() {
        println!("sanitized: {}", sanitize(&call));
    } else {
        for error in &report.errors {
            eprintln!("ERROR: {}", error);
        }
        std::process::exit(1);
    }
}
