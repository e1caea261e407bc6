use clap::Parser;
use context7::cli::commands::{docs, search};
use context7::cli::dispatch::{self, Command};
use context7::cli::errors::{print_error_with_json, print_usage_error};
use context7::cli::tracing_init::init_tracing;
use context7::cli::Cli;
use context7::client::Context7Client;
use context7::config::ClientConfig;
use context7::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Flag errors exit 1 like every other failure; `--version` still exits 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    init_tracing(cli.verbosity);
    let json_errors = cli.json_errors;

    // Usage problems are settled before any configuration or network work.
    let command = match Command::from_args(&cli.args) {
        Ok(command) => command,
        Err(e) => {
            print_usage_error(&e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&cli, command).await {
        print_error_with_json(&e, json_errors);
        std::process::exit(1);
    }
}

async fn run_command(cli: &Cli, command: Command) -> Result<(), Error> {
    if command == Command::Help {
        println!("{}", dispatch::usage());
        return Ok(());
    }

    let config = cli.apply_overrides(ClientConfig::from_env()?)?;
    tracing::debug!(
        base_url = %config.base_url,
        authenticated = config.api_key.is_some(),
        timeout_secs = config.timeout.as_secs(),
        "client configuration"
    );
    let client = Context7Client::new(config)?;

    match command {
        Command::Search(query) => search::execute_search_command(&client, &query).await,
        Command::Docs(request) => docs::execute_docs_command(&client, &request).await,
        Command::Help => Ok(()),
    }
}
