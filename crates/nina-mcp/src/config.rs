//! Gateway startup configuration.

use serde::{Deserialize, Serialize};

/// Where the NINA Advanced API listens and how long one call may take.
///
/// Defaults match a stock NINA install with the Advanced API plugin:
/// `http://localhost:1888/v2/api`, 30 second request timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1888,
            timeout_secs: 30,
        }
    }
}

impl GatewayConfig {
    /// The base URL all resolved endpoints are appended to.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/v2/api", self.host, self.port)
    }
}
