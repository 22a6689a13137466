//! Configuration for the contacts manager server.
//!
//! This module handles loading and validating configuration from environment
//! variables, with a `.env` file picked up when present.

use crate::error::{ConfigError, ConfigResult};
use crate::workbook;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Which repository backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Persist to the Excel workbook at `contacts_file`.
    Excel,
    /// Keep everything in memory, seeded with demo contacts.
    Memory,
}

/// Configuration for the contacts manager server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the contacts workbook, resolved against the working directory
    pub contacts_file: PathBuf,

    /// Address the HTTP server binds to (default: 127.0.0.1:3000)
    pub bind_addr: String,

    /// Storage backend (default: excel)
    pub storage: StorageBackend,

    /// Log level used when RUST_LOG is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: workbook path (default: `sa_contacts.xlsx`)
    /// - `CONTACTS_BIND_ADDR`: listen address (default: `127.0.0.1:3000`)
    /// - `CONTACTS_STORAGE`: `excel` or `memory` (default: `excel`)
    /// - `LOG_LEVEL`: logging level (default: `info`)
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if it exists, but don't fail if it doesn't
        let _ = dotenvy::dotenv();

        let contacts_file =
            env::var("CONTACTS_FILE").unwrap_or_else(|_| workbook::DEFAULT_FILE_NAME.to_string());
        if contacts_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bind_addr =
            env::var("CONTACTS_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        if bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_BIND_ADDR".to_string(),
                reason: format!("Must be a host:port address, got: {}", bind_addr),
            });
        }

        let storage = Self::parse_storage(
            &env::var("CONTACTS_STORAGE").unwrap_or_else(|_| "excel".to_string()),
        )?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            contacts_file: PathBuf::from(contacts_file),
            bind_addr,
            storage,
            log_level,
        })
    }

    fn parse_storage(value: &str) -> ConfigResult<StorageBackend> {
        match value.trim().to_ascii_lowercase().as_str() {
            "excel" => Ok(StorageBackend::Excel),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::InvalidValue {
                var: "CONTACTS_STORAGE".to_string(),
                reason: format!("Must be 'excel' or 'memory', got: {}", other),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(workbook::DEFAULT_FILE_NAME),
            bind_addr: "127.0.0.1:3000".to_string(),
            storage: StorageBackend::Excel,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    fn clear_config_vars() {
        for var in [
            "CONTACTS_FILE",
            "CONTACTS_BIND_ADDR",
            "CONTACTS_STORAGE",
            "LOG_LEVEL",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.contacts_file, PathBuf::from("sa_contacts.xlsx"));
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.storage, StorageBackend::Excel);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_config_vars();
        let config = Config::from_env().unwrap();
        assert_eq!(config.contacts_file, PathBuf::from("sa_contacts.xlsx"));
        assert_eq!(config.storage, StorageBackend::Excel);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        clear_config_vars();
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_FILE", "roster.xlsx");
        guard.set("CONTACTS_BIND_ADDR", "0.0.0.0:8080");
        guard.set("CONTACTS_STORAGE", "Memory");

        let config = Config::from_env().unwrap();
        assert_eq!(config.contacts_file, PathBuf::from("roster.xlsx"));
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    #[serial]
    fn test_config_invalid_bind_addr() {
        clear_config_vars();
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_BIND_ADDR", "not-an-address");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACTS_BIND_ADDR");
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_storage() {
        clear_config_vars();
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_STORAGE", "postgres");

        let result = Config::from_env();
        assert!(result.is_err());
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACTS_STORAGE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_file_rejected() {
        clear_config_vars();
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_FILE", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACTS_FILE");
        }
    }
}
