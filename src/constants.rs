//! Centralized string constants for the Context7 CLI
//!
//! This module contains the wire-level names, environment variables and
//! user-facing messages shared between the library and the binary.

// API endpoints
pub const DEFAULT_BASE_URL: &str = "https://context7.com/api/v2";
pub const PATH_LIBS_SEARCH: &str = "/libs/search";
pub const PATH_CONTEXT: &str = "/context";

// Query parameters
pub const PARAM_LIBRARY_NAME: &str = "libraryName";
pub const PARAM_LIBRARY_ID: &str = "libraryId";
pub const PARAM_QUERY: &str = "query";
pub const PARAM_TYPE: &str = "type";
pub const DOCS_FORMAT_TXT: &str = "txt";

// HTTP Headers
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_USER_AGENT: &str = "User-Agent";
pub const HEADER_BEARER: &str = "Bearer";

// Content Types
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Client identification
pub const USER_AGENT: &str = concat!("context7-cli/", env!("CARGO_PKG_VERSION"));

// Environment Variables
pub const ENV_API_KEY: &str = "CONTEXT7_API_KEY";
pub const ENV_BASE_URL: &str = "CONTEXT7_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CONTEXT7_TIMEOUT_SECS";
pub const ENV_LOG: &str = "CONTEXT7_LOG";
pub const ENV_LOG_FORMAT: &str = "CONTEXT7_LOG_FORMAT";
pub const ENV_LOG_FILE: &str = "CONTEXT7_LOG_FILE";
pub const ENV_LOG_MAX_BODY: &str = "CONTEXT7_LOG_MAX_BODY";

// Default Values
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_MAX_BODY: usize = 1000;
pub const MAX_SEARCH_RESULTS: usize = 10;
pub const MAX_DESCRIPTION_CHARS: usize = 200;
pub const MAX_VERSIONS_SHOWN: usize = 5;

// Placeholders for missing library fields
pub const PLACEHOLDER_ID: &str = "N/A";
pub const PLACEHOLDER_NAME: &str = "Unknown";
pub const PLACEHOLDER_DESCRIPTION: &str = "No description";
pub const PLACEHOLDER_TRUST_SCORE: &str = "N/A";
pub const ELLIPSIS: &str = "...";

// HTTP status messages
pub const ERR_STATUS_202: &str = "Library not fully indexed yet. Try again later.";
pub const ERR_STATUS_301: &str = "Library has been moved. Check the response for the new ID.";
pub const ERR_STATUS_400: &str = "Invalid request parameters. Check your query.";
pub const ERR_STATUS_401: &str = "Invalid API key. Check your CONTEXT7_API_KEY.";
pub const ERR_STATUS_403: &str = "Access denied. You may not have permission for this library.";
pub const ERR_STATUS_404: &str = "Library not found. Use 'search' to find the correct ID.";
pub const ERR_STATUS_422: &str = "Library is too large or has no processable code.";
pub const ERR_STATUS_429: &str =
    "Rate limit exceeded. Wait a moment and try again, or add an API key.";
pub const ERR_STATUS_500: &str = "Server error. Try again later.";
pub const ERR_STATUS_503: &str = "Service unavailable. Try again later.";

// CLI Messages
pub const MSG_NO_LIBRARIES_HINT: &str = "Try a different name or check spelling.";
pub const MSG_NO_DOCS_HINT: &str = "Try a more specific or different query.";
pub const MSG_USE_SEARCH_OR_DOCS: &str = "Use 'search' or 'docs'. Run with --help for usage.";
pub const MSG_SEARCH_FIRST: &str = "First use 'search' to find the library ID:";
pub const MSG_API_KEY_URL: &str = "Get an API key at https://context7.com/dashboard";

/// Check if a header name carries credentials
#[must_use]
pub fn is_auth_header(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "authorization" | "proxy-authorization" | "x-api-key" | "cookie" | "set-cookie"
    )
}
