//! Configuration management for the status API

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Timeout applied to every upstream status request
    pub upstream_timeout: Duration,

    /// Optional JSON file replacing the built-in service registry
    pub registry_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upstream_timeout: Duration::from_secs(5),
            registry_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup, starting from defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        if let Some(timeout) = lookup("UPSTREAM_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.upstream_timeout = Duration::from_secs(seconds);
            }
        }

        if let Some(path) = lookup("SERVICE_REGISTRY_PATH") {
            if !path.trim().is_empty() {
                config.registry_path = Some(PathBuf::from(path));
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.upstream_timeout.is_zero() {
            return Err("upstream_timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Command-line overrides, applied on top of the environment.
#[derive(Debug, Default, Parser)]
#[command(name = "service-status-api", version, about = "Aggregated status feed for external dependencies")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Upstream request timeout in seconds
    #[arg(long = "timeout-seconds")]
    pub timeout_seconds: Option<u64>,

    /// Path to a JSON service registry
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

impl Cli {
    pub fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(seconds) = self.timeout_seconds {
            config.upstream_timeout = Duration::from_secs(seconds);
        }
        if let Some(path) = self.registry {
            config.registry_path = Some(path);
        }
    }
}
