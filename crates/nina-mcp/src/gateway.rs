//! Invocation executor: one tool call, one HTTP GET.

use std::time::Duration;

use nina_mcp_core::{resolve, ResolveError};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::GatewayConfig;

/// Failures on the way to, or back from, the NINA Advanced API.
///
/// These never escape [`NinaGateway::invoke`]; they are rendered into the
/// tool's text result at that boundary.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Network error, timeout, or non-2xx status from the API.
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

/// The tool gateway: a shared HTTP client plus the API base URL.
///
/// One instance lives for the whole process and is reused across all
/// invocations. Invocations are independent and stateless, so concurrent
/// calls need no coordination beyond sharing the client.
pub struct NinaGateway {
    client: reqwest::Client,
    base_url: String,
}

impl NinaGateway {
    /// Build the gateway from startup configuration.
    ///
    /// The request timeout is set once on the shared client and bounds every
    /// invocation; a call that exceeds it is abandoned and reported as an
    /// upstream failure.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        Self::with_base_url(config.base_url(), Duration::from_secs(config.timeout_secs))
    }

    /// Build the gateway against an explicit base URL. Used directly by
    /// tests that point the gateway at a mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Execute one tool invocation and render the outcome as result text.
    ///
    /// This is the error boundary of the gateway: unknown tool names and any
    /// upstream failure come back as an `Error: ...` string instead of
    /// propagating, so a failed call never takes the server down.
    pub async fn invoke(&self, name: &str, args: &Map<String, Value>) -> String {
        info!(tool = %name, "Calling tool");
        match self.try_invoke(name, args).await {
            Ok(text) => text,
            Err(e) => {
                error!(tool = %name, error = %e, "Tool execution failed");
                format!("Error: {e}")
            }
        }
    }

    async fn try_invoke(
        &self,
        name: &str,
        args: &Map<String, Value>,
    ) -> Result<String, GatewayError> {
        let endpoint = resolve(name, args)?;
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(url = %url, "API call");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: Value = response.json().await?;
        Ok(body.to_string())
    }
}
