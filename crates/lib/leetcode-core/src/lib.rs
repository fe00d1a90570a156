//! Core types and services for leetcode-mcp.
//!
//! This crate owns the GraphQL client used to talk to the LeetCode endpoint,
//! the problem identifier helpers for local problem folders, and the control
//! plane that resolves slugs, descriptions, and solution articles.

pub mod control;
pub mod graphql;
pub mod ident;
