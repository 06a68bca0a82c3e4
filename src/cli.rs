//! Command line arguments and the one-shot `--check` mode.

use clap::Parser;

use crate::health::{HealthStatus, PrivateShareMiddleware};

/// Health probe service for the private share middleware
#[derive(Parser, Debug)]
#[command(name = "private-share-middleware", version, about)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level filter (e.g., "private_share_middleware=debug,tower_http=info")
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Evaluate the health probe once, print it, and exit (0 = healthy)
    #[arg(long)]
    pub check: bool,
}

/// Process exit status for a probe result: 0 when available, 1 otherwise.
pub fn check_exit_code(status: &HealthStatus) -> u8 {
    if status.is_available() {
        0
    } else {
        1
    }
}

/// Evaluate the probe once. Returns the JSON line to print and the exit status.
pub fn run_check(component: &PrivateShareMiddleware) -> Result<(String, u8), serde_json::Error> {
    let status = component.health();
    Ok((serde_json::to_string(&status)?, check_exit_code(&status)))
}
