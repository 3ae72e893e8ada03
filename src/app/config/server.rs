//! HTTP listener configuration.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

/// Default listen port, overridable with the `PORT` environment variable.
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ServerConfig {
    #[must_use]
    pub fn socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
