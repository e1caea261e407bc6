//! Command-token dispatch.
//!
//! `clap` only owns the global flags; everything from the command token on
//! is interpreted here so that matching stays case-insensitive and the
//! usage messages stay in our own words.

use crate::constants;
use crate::models::{DocsRequest, SearchQuery};
use std::fmt;

const BIN: &str = "context7";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(SearchQuery),
    Docs(DocsRequest),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    NoArguments,
    MissingLibraryName,
    MissingDocsArguments,
    UnknownCommand(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArguments => write!(f, "No command given"),
            Self::MissingLibraryName => write!(f, "Missing library name"),
            Self::MissingDocsArguments => write!(f, "Missing library ID or query"),
            Self::UnknownCommand(command) => write!(f, "Unknown command '{command}'"),
        }
    }
}

impl std::error::Error for UsageError {}

impl Command {
    /// Interprets the positional arguments that follow the global flags.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for missing or unknown commands and missing
    /// operands. Nothing here touches the network.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        let Some((command, rest)) = args.split_first() else {
            return Err(UsageError::NoArguments);
        };

        match command.to_lowercase().as_str() {
            "search" => {
                let (library_name, words) =
                    rest.split_first().ok_or(UsageError::MissingLibraryName)?;
                let query = (!words.is_empty()).then(|| words.join(" "));
                Ok(Self::Search(SearchQuery::new(library_name.clone(), query)))
            }
            "docs" => match rest.split_first() {
                Some((library_id, words)) if !words.is_empty() => Ok(Self::Docs(
                    DocsRequest::new(library_id.clone(), words.join(" ")),
                )),
                _ => Err(UsageError::MissingDocsArguments),
            },
            "--help" | "-h" | "help" => Ok(Self::Help),
            other => Err(UsageError::UnknownCommand(other.to_string())),
        }
    }
}

/// Full usage text printed for `--help` and for a bare invocation.
#[must_use]
pub fn usage() -> String {
    format!(
        "Context7 Documentation Lookup

Usage:
  {BIN} [OPTIONS] search <library-name> [query]    Search for a library
  {BIN} [OPTIONS] docs <library-id> <query>        Get documentation

Options:
  -v, -vv                Increase logging verbosity (debug, trace)
      --json-errors      Print errors as JSON on stderr
      --base-url <URL>   Override the API base URL
      --timeout <SECS>   Request timeout in seconds (default: {timeout})
  -V, --version          Print version

Environment:
  {api_key}    Optional. Your Context7 API key for higher rate limits.
  {base_url}   Optional. Overrides the API base URL.

Examples:
  {BIN} search react \"hooks\"
  {BIN} docs /facebook/react \"useEffect cleanup\"
  {BIN} search nextjs \"app router\"
  {BIN} docs /vercel/next.js \"server components\"

{api_key_url}",
        timeout = constants::DEFAULT_TIMEOUT_SECS,
        api_key = constants::ENV_API_KEY,
        base_url = constants::ENV_BASE_URL,
        api_key_url = constants::MSG_API_KEY_URL,
    )
}

/// One-line usage for the `search` command.
#[must_use]
pub fn search_usage() -> String {
    format!("Usage: {BIN} search <library-name> [query]")
}

/// Usage for the `docs` command, pointing at `search` for finding ids.
#[must_use]
pub fn docs_usage() -> String {
    format!(
        "Usage: {BIN} docs <library-id> <query>\n\n{}\n  {BIN} search react \"hooks\"",
        constants::MSG_SEARCH_FIRST
    )
}
