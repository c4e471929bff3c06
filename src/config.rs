//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. Values are read once at startup and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Cache capacity in bytes
    pub capacity: u64,
    /// Item expiration in seconds (accepted, not enforced)
    pub expiration: u64,
    /// Expired item cleanup interval in seconds (accepted, not enforced)
    pub cleanup_interval: u64,
    /// Address the HTTP server binds to
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Capacity in bytes (default: 100000000)
    /// - `CACHE_EXPIRATION` - Expiration in seconds (default: 600)
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup interval in seconds (default: 300)
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_or("CACHE_CAPACITY", defaults.capacity),
            expiration: env_or("CACHE_EXPIRATION", defaults.expiration),
            cleanup_interval: env_or("CACHE_CLEANUP_INTERVAL", defaults.cleanup_interval),
            server_host: env_or("SERVER_HOST", defaults.server_host),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }

    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 100_000_000,
            expiration: 600,
            cleanup_interval: 300,
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 8080,
        }
    }
}

/// Parses an environment variable, falling back when unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 100_000_000);
        assert_eq!(config.expiration, 600);
        assert_eq!(config.cleanup_interval, 300);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.expiration(), Duration::from_secs(600));
        assert_eq!(config.cleanup_interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_env_or_parses_and_falls_back() {
        // Names unique to this test so parallel tests don't interfere
        env::set_var("LRUCACHED_TEST_PORT", " 9000 ");
        env::set_var("LRUCACHED_TEST_BAD", "not-a-number");
        env::remove_var("LRUCACHED_TEST_UNSET");

        assert_eq!(env_or("LRUCACHED_TEST_PORT", 1u16), 9000);
        assert_eq!(env_or("LRUCACHED_TEST_BAD", 7u64), 7);
        assert_eq!(env_or("LRUCACHED_TEST_UNSET", 5u64), 5);
    }
}
