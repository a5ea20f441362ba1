//! Sonar - On-demand Ping Probe Service
//!
//! Exposes the operating system's ping utility over HTTP: a caller submits a
//! target host and packet count, the service runs ping as a child process
//! under a wall-clock budget, parses the textual output into structured
//! statistics, and returns both the raw and parsed results.
//!
//! # Architecture
//!
//! - **Config**: YAML configuration with env-var expansion and validation
//! - **Ping**: command construction, bounded child-process execution, output
//!   parsing
//! - **Server**: Axum HTTP API (`POST /ping`, `GET /health`)

pub mod config;
pub mod ping;
pub mod server;

pub use config::{AppConfig, ConfigError, ProbeConfig, ServerConfig};
pub use ping::{CommandLine, PingError, PingStats, Platform, parse_ping_output, ping_command};
pub use server::{AppState, create_router};
