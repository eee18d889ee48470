//! Nutri-Score Tools module
//!
//! Tool implementations behind the MCP server.

pub mod nutriscore;
pub mod status;
