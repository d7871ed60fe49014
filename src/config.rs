// ABOUTME: Configuration loading for the varsheet host bridge.
// ABOUTME: Reads environment variables, which command-line flags may override.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("VARSHEET_PRETTY is not a boolean: {0}")]
    InvalidPretty(String),
}

/// Host bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub registry: PathBuf,
    pub pretty: bool,
}

impl HostConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - VARSHEET_REGISTRY: registry snapshot path (default: registry.json)
    /// - VARSHEET_PRETTY: pretty-print outbound messages (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let registry = std::env::var("VARSHEET_REGISTRY")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("registry.json"));

        let pretty = match std::env::var("VARSHEET_PRETTY") {
            Ok(v) => parse_bool(&v).ok_or(ConfigError::InvalidPretty(v))?,
            Err(_) => false,
        };

        Ok(Self { registry, pretty })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, registry: Option<PathBuf>, pretty: bool) -> Self {
        if let Some(registry) = registry {
            self.registry = registry;
        }
        self.pretty |= pretty;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
