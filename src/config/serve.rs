//! `[serve]` configuration for the local preview server.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Preview server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    pub interface: IpAddr,

    /// Port number to listen on.
    pub port: u16,

    /// Keep `site.base_url` as URL prefix during local preview.
    /// Off by default so pages are reachable at `/`.
    pub respect_prefix: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            respect_prefix: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let serve = ServeConfig::default();
        assert_eq!(serve.interface, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(serve.port, 3000);
        assert!(!serve.respect_prefix);
    }
}
