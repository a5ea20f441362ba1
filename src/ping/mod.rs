//! Ping probe pipeline.
//!
//! Three steps, each independent and testable on its own:
//! command construction ([`ping_command`]), bounded child-process execution
//! ([`run_command`]), and output parsing ([`parse_ping_output`]).

mod command;
mod parser;
mod runner;

pub use command::{CommandLine, Platform, ping_command};
pub use parser::{PingStats, parse_ping_output};
pub use runner::run_command;

use std::time::Duration;

use thiserror::Error;

/// Default packet count when the request does not specify one.
pub const DEFAULT_COUNT: u32 = 4;

/// Errors that can occur while running the ping utility.
#[derive(Debug, Error)]
pub enum PingError {
    /// The ping process could not be started or awaited.
    #[error("failed to run ping process: {0}")]
    Io(#[from] std::io::Error),

    /// The ping process exited with a non-zero status.
    #[error("ping failed: {stderr}")]
    Execution { stderr: String },

    /// The ping process did not finish within the execution budget.
    #[error("ping did not finish within {0:?}")]
    Timeout(Duration),
}
