//! Command-line client for the Context7 documentation search API.
//!
//! One invocation makes at most one GET request: either a library search
//! (`/libs/search`) or a documentation fetch (`/context`), rendered as
//! Markdown on stdout.

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod request;
