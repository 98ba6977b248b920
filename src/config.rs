//! Configuration management for the contact form.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded silently if present, since stdout carries MCP traffic.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Table the form inserts into unless `CONTACT_TABLE` overrides it.
pub const DEFAULT_TABLE: &str = "contactos";

/// Configuration for the contact form server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL
    pub supabase_url: String,

    /// Supabase anon (public) key
    pub supabase_key: String,

    /// Target table (default: "contactos")
    pub table: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SUPABASE_URL`: Base URL of the Supabase project
    /// - `SUPABASE_ANON_KEY`: API key sent as `apikey` and bearer token
    ///
    /// Optional environment variables:
    /// - `CONTACT_TABLE`: Target table (default: "contactos")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let supabase_url = env::var("SUPABASE_URL")
            .map_err(|_| ConfigError::MissingVar("SUPABASE_URL".to_string()))?;

        let supabase_key = env::var("SUPABASE_ANON_KEY")
            .map_err(|_| ConfigError::MissingVar("SUPABASE_ANON_KEY".to_string()))?;

        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SUPABASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if supabase_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SUPABASE_ANON_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let table = env::var("CONTACT_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        if table.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_TABLE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            supabase_url,
            supabase_key,
            table,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            supabase_url: String::new(),
            supabase_key: String::new(),
            table: DEFAULT_TABLE.to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets env vars for one test and removes them on drop
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
        assert_eq!(config.table, "contactos");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_url() {
        let mut guard = EnvGuard::new();
        guard.set("SUPABASE_ANON_KEY", "test-key");
        env::remove_var("SUPABASE_URL");

        match Config::from_env() {
            Err(ConfigError::MissingVar(var)) => assert_eq!(var, "SUPABASE_URL"),
            other => panic!("Expected MissingVar error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_key() {
        let mut guard = EnvGuard::new();
        guard.set("SUPABASE_URL", "https://project.supabase.co");
        env::remove_var("SUPABASE_ANON_KEY");

        match Config::from_env() {
            Err(ConfigError::MissingVar(var)) => assert_eq!(var, "SUPABASE_ANON_KEY"),
            other => panic!("Expected MissingVar error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("SUPABASE_URL", "not-a-url");
        guard.set("SUPABASE_ANON_KEY", "test-key");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "SUPABASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_key() {
        let mut guard = EnvGuard::new();
        guard.set("SUPABASE_URL", "https://project.supabase.co");
        guard.set("SUPABASE_ANON_KEY", "   ");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "SUPABASE_ANON_KEY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("SUPABASE_URL", "https://project.supabase.co");
        guard.set("SUPABASE_ANON_KEY", "anon-key-123");
        guard.set("CONTACT_TABLE", "contactos_test");
        guard.set("REQUEST_TIMEOUT", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert_eq!(config.supabase_key, "anon-key-123");
        assert_eq!(config.table, "contactos_test");
        assert_eq!(config.request_timeout, 5);
    }

    #[test]
    #[serial]
    fn test_config_zero_timeout_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("SUPABASE_URL", "https://project.supabase.co");
        guard.set("SUPABASE_ANON_KEY", "anon-key-123");
        guard.set("REQUEST_TIMEOUT", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "REQUEST_TIMEOUT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        assert_eq!(Config::parse_env_u64("TEST_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u64("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        assert!(Config::parse_env_u64("TEST_U64_INVALID", 10).is_err());
    }
}
