//! Application configuration structures.

use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::validation::{ConfigError, expand_env_vars};

// =============================================================================
// Constants
// =============================================================================

/// Default wall-clock budget for one ping run (20 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default ping program name.
pub const DEFAULT_PROGRAM: &str = "ping";

// =============================================================================
// Server Configuration
// =============================================================================

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address (default: "0.0.0.0").
    pub bind: String,

    /// Server port (default: 8080).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

// =============================================================================
// Probe Configuration
// =============================================================================

/// Ping probe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Ping program to invoke (default: "ping").
    pub program: String,

    /// Wall-clock budget for one ping run (default: 20s).
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// =============================================================================
// Application Configuration
// =============================================================================

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Web server configuration.
    pub server: ServerConfig,

    /// Ping probe configuration.
    pub probe: ProbeConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// Environment variables in the file (`${VAR}` / `${VAR:-default}`) are
    /// expanded before parsing.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&expand_env_vars(&content))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// The service has no required settings, so a missing file is not fatal.
    ///
    /// # Errors
    /// Returns `ConfigError` if an existing file cannot be read, parsed, or
    /// validated.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if any field is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate server bind address
        self.server.bind.parse::<IpAddr>().map_err(|_| {
            ConfigError::Validation(format!(
                "invalid server bind address: '{}'",
                self.server.bind
            ))
        })?;

        // Validate server port
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server port must be non-zero".to_string(),
            ));
        }

        // Validate probe program
        if self.probe.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "probe program must be non-empty".to_string(),
            ));
        }

        // Validate probe timeout
        if self.probe.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "probe timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_probe_config_default() {
        let config = ProbeConfig::default();
        assert_eq!(config.program, DEFAULT_PROGRAM);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_config_validation_valid() {
        let config = AppConfig {
            server: ServerConfig {
                bind: "127.0.0.1".to_string(),
                port: 8080,
            },
            probe: ProbeConfig::default(),
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_port() {
        let config = AppConfig {
            server: ServerConfig {
                bind: "0.0.0.0".to_string(),
                port: 0,
            },
            probe: ProbeConfig::default(),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_bind_address() {
        let config = AppConfig {
            server: ServerConfig {
                bind: "not-an-ip".to_string(),
                port: 8080,
            },
            probe: ProbeConfig::default(),
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid server bind address")
        );
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = AppConfig {
            server: ServerConfig::default(),
            probe: ProbeConfig {
                program: "ping".to_string(),
                timeout: Duration::ZERO,
            },
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_program() {
        let config = AppConfig {
            server: ServerConfig::default(),
            probe: ProbeConfig {
                program: "  ".to_string(),
                timeout: DEFAULT_TIMEOUT,
            },
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "server:\n  bind: \"127.0.0.1\"\n  port: 9090\nprobe:\n  program: ping\n  timeout: 5s\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.probe.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_load_partial_yaml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "server:\n  port: 9191\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.probe.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_load_expands_env_vars() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "probe:\n  program: \"${SONAR_TEST_MISSING_BIN:-ping}\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.probe.program, "ping");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default("does/not/exist.yaml").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.probe.timeout, DEFAULT_TIMEOUT);
    }
}
