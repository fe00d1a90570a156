//! MCP tool modules.
//!
//! Tools are grouped by lookup: slug resolution, question descriptions,
//! solution articles, and contextual help.

mod context;
pub mod description;
pub mod slug;
pub mod solution;
