use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub api_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = match env::var("HOST") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("HOST '{}' is not a valid IP address, using {}", raw, defaults.host);
                defaults.host
            }),
            Err(_) => defaults.host,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let api_prefix = env::var("API_PREFIX")
            .map(|raw| normalize_prefix(&raw))
            .unwrap_or_else(|_| defaults.api_prefix.clone());

        Self {
            host,
            port,
            api_prefix,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Leading slash, no trailing slash. An empty prefix mounts routes at the root.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        warn!("API_PREFIX is empty, mounting API routes at the root");
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
