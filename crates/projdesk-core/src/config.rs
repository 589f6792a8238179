//! Startup configuration for the backend service client.
//!
//! Two credentials are required: the service URL and the anonymous API key.
//! They come from the process environment (the CLI loads a local `.env` file
//! first); a missing value is fatal at startup.

use crate::error::{DeskError, Result};

/// Environment variable holding the hosted service URL.
pub const ENV_API_URL: &str = "PROJDESK_API_URL";

/// Environment variable holding the anonymous API key.
pub const ENV_ANON_KEY: &str = "PROJDESK_ANON_KEY";

/// Credentials for the hosted backend service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the service, without a trailing slash.
    pub api_url: String,
    /// Anonymous API key, sent as both `apikey` and bearer token.
    pub anon_key: String,
}

impl Config {
    /// Build a configuration from explicit values.
    ///
    /// A trailing slash on the URL is stripped so request paths can be
    /// appended uniformly.
    #[must_use]
    pub fn new(api_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self {
            api_url,
            anon_key: anon_key.into(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`DeskError::ConfigError`] naming the missing variable if
    /// either credential is absent or empty.
    pub fn from_env() -> Result<Self> {
        let api_url = read_var(ENV_API_URL)?;
        let anon_key = read_var(ENV_ANON_KEY)?;
        Ok(Self::new(api_url, anon_key))
    }
}

fn read_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(DeskError::ConfigError(format!("{name} is not set"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let cfg = Config::new("https://db.example.com/", "key");
        assert_eq!(cfg.api_url, "https://db.example.com");

        let cfg = Config::new("https://db.example.com//", "key");
        assert_eq!(cfg.api_url, "https://db.example.com");
    }

    #[test]
    fn test_new_keeps_plain_url() {
        let cfg = Config::new("https://db.example.com", "key");
        assert_eq!(cfg.api_url, "https://db.example.com");
        assert_eq!(cfg.anon_key, "key");
    }

    // from_env is exercised with process-wide env vars; keep the two cases in
    // one test to avoid racing parallel test threads on the same variables.
    #[test]
    fn test_from_env_missing_and_present() {
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_ANON_KEY);
        match Config::from_env() {
            Err(DeskError::ConfigError(msg)) => assert!(msg.contains(ENV_API_URL)),
            other => panic!("expected ConfigError, got {other:?}"),
        }

        std::env::set_var(ENV_API_URL, "https://db.example.com/");
        match Config::from_env() {
            Err(DeskError::ConfigError(msg)) => assert!(msg.contains(ENV_ANON_KEY)),
            other => panic!("expected ConfigError, got {other:?}"),
        }

        std::env::set_var(ENV_ANON_KEY, "anon-key");
        let cfg = Config::from_env().expect("both variables set");
        assert_eq!(cfg.api_url, "https://db.example.com");
        assert_eq!(cfg.anon_key, "anon-key");

        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_ANON_KEY);
    }

    #[test]
    fn test_empty_value_is_missing() {
        std::env::set_var("PROJDESK_TEST_EMPTY", "   ");
        match read_var("PROJDESK_TEST_EMPTY") {
            Err(DeskError::ConfigError(msg)) => assert!(msg.contains("PROJDESK_TEST_EMPTY")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
        std::env::remove_var("PROJDESK_TEST_EMPTY");
    }
}
