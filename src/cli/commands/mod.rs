//! CLI command handlers.
//!
//! Each submodule runs one dispatched [`Command`](super::dispatch::Command)
//! variant and prints its report to stdout.

#[allow(clippy::missing_errors_doc)]
pub mod docs;
#[allow(clippy::missing_errors_doc)]
pub mod search;
