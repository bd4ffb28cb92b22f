//! # NINA MCP Core
//!
//! The data core of the NINA Advanced API MCP gateway: a static catalog of
//! tool descriptors and the endpoint resolver that turns a tool invocation
//! into a relative URL on NINA's local HTTP control API.
//!
//! One declarative table ([`catalog::TOOLS`]) drives both sides. Each entry
//! carries the advertised input schema *and* the endpoint template, so the
//! catalog and the name-to-endpoint mapping cannot drift apart.
//!
//! This crate is deliberately free of I/O and async; the HTTP and MCP
//! plumbing lives in the `nina-mcp` crate.

pub mod catalog;
pub mod error;
pub mod resolve;

pub use catalog::{DefaultValue, ParamKind, ParamSpec, QueryArg, ToolSpec};
pub use error::ResolveError;
pub use resolve::resolve;
