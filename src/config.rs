//! Configuration management for the contact book server.
//!
//! This module handles loading and validating configuration from environment
//! variables, with `.env` file support via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "contacts.db")
    pub db_path: String,

    /// TCP port to listen on (default: 8080)
    pub port: u16,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACT_BOOK_DB`: SQLite database path (default: "contacts.db")
    /// - `CONTACT_BOOK_PORT`: TCP port (default: 8080)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let db_path =
            env::var("CONTACT_BOOK_DB").unwrap_or_else(|_| "contacts.db".to_string());

        if db_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_DB".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let port = Self::parse_env_u16("CONTACT_BOOK_PORT", 8080)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            db_path,
            port,
            log_level,
        })
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: "contacts.db".to_string(),
            port: 8080,
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

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.db_path, "contacts.db");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("CONTACT_BOOK_DB");
        env::remove_var("CONTACT_BOOK_PORT");

        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.db_path, "contacts.db");
        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_DB", "/tmp/test-contacts.db");
        guard.set("CONTACT_BOOK_PORT", "3000");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.db_path, "/tmp/test-contacts.db");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_db_path() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_DB", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACT_BOOK_DB");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_port() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PORT", "not-a-port");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACT_BOOK_PORT");
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u16() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_PORT", "42");

        let result = Config::parse_env_u16("TEST_PORT", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u16("NONEXISTENT_PORT", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
