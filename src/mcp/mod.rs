//! MCP protocol implementation.
//!
//! - [`protocol`] — JSON-RPC 2.0 message types and parsing
//! - [`transport`] — newline-delimited stdio transport
//! - [`server`] — lifecycle handling and the fourteen-tool registry

pub mod protocol;
pub mod server;
pub mod transport;
