// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for Arris Exporter application
//!
//! Loads configuration from command-line flags and environment variables
//! (a `.env` file is honoured), then validates it.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;

use crate::error::{AppError, Result};

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    pub const MODEM_HOST: &str = "192.168.100.1";
    pub const LISTEN_ADDRESS: &str = "0.0.0.0";
    pub const PROMETHEUS_PORT: u16 = 9300;
    pub const SCRAPE_INTERVAL_SECS: u64 = 10;
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const MODEM_HOST: &str = "MODEM_HOST";
    pub const LISTEN_ADDRESS: &str = "LISTEN_ADDRESS";
    pub const PROMETHEUS_PORT: &str = "PROMETHEUS_PORT";
    pub const SCRAPE_INTERVAL_SECONDS: &str = "SCRAPE_INTERVAL_SECONDS";
    pub const REQUEST_TIMEOUT_SECONDS: &str = "REQUEST_TIMEOUT_SECONDS";
}

/// Prometheus exporter for Arris cable modems
#[derive(Debug, Parser)]
#[command(name = "arris-exporter", version, long_about = None)]
pub struct Cli {
    /// Host or IP of the modem web interface
    #[arg(long, env = env_vars::MODEM_HOST, default_value = defaults::MODEM_HOST)]
    pub host: String,

    /// How often to scrape the modem, in seconds
    #[arg(short, long, env = env_vars::SCRAPE_INTERVAL_SECONDS, default_value_t = defaults::SCRAPE_INTERVAL_SECS)]
    pub interval: u64,

    /// Port to expose Prometheus metrics on
    #[arg(long, env = env_vars::PROMETHEUS_PORT, default_value_t = defaults::PROMETHEUS_PORT)]
    pub port: u16,

    /// Address the metrics server binds to
    #[arg(long, env = env_vars::LISTEN_ADDRESS, default_value = defaults::LISTEN_ADDRESS)]
    pub listen_address: String,

    /// Timeout for each request to the modem, in seconds
    #[arg(long, env = env_vars::REQUEST_TIMEOUT_SECONDS, default_value_t = defaults::REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub modem_host: String,
    pub server_addr: SocketAddr,
    pub scrape_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            modem_host: defaults::MODEM_HOST.to_string(),
            server_addr: SocketAddr::from(([0, 0, 0, 0], defaults::PROMETHEUS_PORT)),
            scrape_interval: Duration::from_secs(defaults::SCRAPE_INTERVAL_SECS),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from the environment and command-line flags
    ///
    /// Variables from `.env` are only seen if the caller loaded it first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any value fails validation.
    pub fn load() -> Result<Self> {
        Self::from_cli(Cli::parse())
    }

    /// Builds and validates configuration from parsed flags
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any value fails validation.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let host = cli.host.trim();
        if host.is_empty() {
            return Err(AppError::Config("modem host cannot be empty".to_string()));
        }
        if host.contains("://") || host.contains('/') {
            return Err(AppError::Config(format!(
                "Invalid modem host '{host}': expected a bare host or IP without scheme or path"
            )));
        }
        if cli.interval == 0 {
            return Err(AppError::Config(
                "scrape interval must be at least 1 second".to_string(),
            ));
        }
        if cli.timeout == 0 {
            return Err(AppError::Config(
                "request timeout must be at least 1 second".to_string(),
            ));
        }

        let listen_ip: IpAddr = cli.listen_address.trim().parse().map_err(|e| {
            AppError::Config(format!(
                "Invalid listen address '{}': {e}",
                cli.listen_address
            ))
        })?;

        Ok(Config {
            modem_host: host.to_string(),
            server_addr: SocketAddr::new(listen_ip, cli.port),
            scrape_interval: Duration::from_secs(cli.interval),
            request_timeout: Duration::from_secs(cli.timeout),
        })
    }
}
