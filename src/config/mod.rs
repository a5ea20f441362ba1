//! Configuration module for Sonar.
//!
//! Provides YAML-based configuration loading and validation for:
//! - Server settings (port, bind address)
//! - Probe settings (ping program, execution budget)

mod app;
mod validation;

pub use app::{AppConfig, ProbeConfig, ServerConfig};
pub use validation::{ConfigError, expand_env_vars};

// Re-export constants
pub use app::{DEFAULT_PROGRAM, DEFAULT_TIMEOUT};
