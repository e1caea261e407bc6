pub mod commands;
pub mod dispatch;
pub mod errors;
pub mod tracing_init;

use crate::config::ClientConfig;
use crate::error::Error;
use clap::{ArgAction, Parser};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "context7",
    version,
    about = "Context7: up-to-date library documentation for humans and LLMs",
    disable_help_flag = true,
    override_usage = "context7 [OPTIONS] <search|docs|help> [ARGS]..."
)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(
        short = 'v',
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v for debug, -vv for trace)"
    )]
    pub verbosity: u8,

    /// Output all errors as structured JSON to stderr
    #[arg(long, help = "Output errors in JSON format")]
    pub json_errors: bool,

    /// Override the API base URL (also `CONTEXT7_BASE_URL`)
    #[arg(long, value_name = "URL", help = "Override the API base URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (also `CONTEXT7_TIMEOUT_SECS`)
    #[arg(
        long,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout in seconds (default: 30)"
    )]
    pub timeout: Option<u64>,

    /// The command token and its operands, interpreted by [`dispatch::Command::from_args`]
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Layers the CLI flags over an environment-derived configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `--base-url` is not a valid http(s) URL.
    pub fn apply_overrides(&self, mut config: ClientConfig) -> Result<ClientConfig, Error> {
        if let Some(url) = self.base_url.as_deref() {
            config = config.with_base_url(url)?;
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
