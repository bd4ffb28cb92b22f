//! Resolver error types.

use thiserror::Error;

/// Errors produced while resolving a tool invocation to an endpoint.
///
/// Resolution is total over the catalog, so the only structural failure is
/// an invoked name with no table entry. Argument values are interpolated
/// without range or type validation; malformed input is forwarded to the
/// remote API as-is and surfaces through its HTTP response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The invoked name matches no catalog entry.
    #[error("Unknown tool {0}")]
    UnknownTool(String),
}
