//! # NINA MCP Gateway
//!
//! An MCP (Model Context Protocol) server that exposes NINA's Advanced API
//! as assistant-callable tools. Each invocation becomes exactly one HTTP GET
//! against the local NINA instance; the raw JSON response comes back as the
//! tool's text result.
//!
//! The tool catalog and URL templates live in `nina-mcp-core`; this crate
//! adds the shared HTTP client, the invocation executor, and the rmcp
//! protocol surface.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nina_mcp::{GatewayConfig, NinaGateway, NinaMcpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = NinaGateway::new(&GatewayConfig::default())?;
//!     NinaMcpServer::new(gateway).serve_stdio().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod gateway;
pub mod server;

pub use config::GatewayConfig;
pub use gateway::{GatewayError, NinaGateway};
pub use server::{NinaMcpServer, ServeError};
