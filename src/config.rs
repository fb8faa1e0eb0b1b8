//! Server configuration from environment variables.
//!
//! - `HOST`: bind address (default `0.0.0.0`)
//! - `PORT`: listen port (default `3000`)
//! - `RUST_LOG`: log filter, read by the binary (default `DEFAULT_LOG_FILTER`)
//!
//! Unparseable values fall back to the defaults with a warning.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default log level: info for our crate, debug for HTTP plumbing, warn for others
pub const DEFAULT_LOG_FILTER: &str = "carbon_footprint=info,tower_http=debug,axum=debug,warn";

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test fixtures).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid HOST '{}', using {}", raw, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
