//! Error display formatting for the CLI.

use crate::cli::dispatch::{self, UsageError};
use crate::constants;
use crate::error::{Error, ErrorReport};

/// Prints an error message, either as JSON or user-friendly format.
pub fn print_error_with_json(error: &Error, json_format: bool) {
    if !json_format {
        print_error(error);
        return;
    }
    let json_error = error.to_json();
    let Ok(json_output) = serde_json::to_string_pretty(&json_error) else {
        print_error(error);
        return;
    };
    eprintln!("{json_output}");
}

/// Prints a user-friendly error message to stderr.
pub fn print_error(error: &Error) {
    match error {
        Error::HttpStatus { status, body } => {
            let report = ErrorReport::from_response(*status, body);
            eprintln!("Error: {}", report.summary());
            if let Some(detail) = &report.detail {
                eprintln!("Details: {detail}");
            }
        }
        Error::Config(msg) => eprintln!("Error: {msg}"),
        Error::Connection { .. } | Error::InvalidResponse { .. } => eprintln!("Error: {error}"),
    }
}

/// Reports a usage problem.
///
/// Corrective usage text goes to stdout, the error line itself to stderr.
/// A bare invocation just prints the full usage.
pub fn print_usage_error(error: &UsageError) {
    match error {
        UsageError::NoArguments => println!("{}", dispatch::usage()),
        UsageError::MissingLibraryName => {
            eprintln!("Error: {error}");
            println!("{}", dispatch::search_usage());
        }
        UsageError::MissingDocsArguments => {
            eprintln!("Error: {error}");
            println!("{}", dispatch::docs_usage());
        }
        UsageError::UnknownCommand(_) => {
            eprintln!("Error: {error}");
            println!("{}", constants::MSG_USE_SEARCH_OR_DOCS);
        }
    }
}
