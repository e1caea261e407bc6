//! Request and response logging with credential redaction.
//!
//! The request line and status go out at info level, headers at debug and
//! bodies at trace. Credential-carrying headers are always printed as
//! `[REDACTED]`.

use crate::constants;
use reqwest::header::HeaderMap;
use tracing::{debug, info, trace};

/// Redacts sensitive values from strings
#[must_use]
pub fn redact_sensitive_value(value: &str) -> String {
    if value.is_empty() {
        value.to_string()
    } else {
        "[REDACTED]".to_string()
    }
}

fn log_headers(direction: &str, headers: &HeaderMap) {
    debug!(target: "context7::client", "{direction} headers:");
    for (name, value) in headers {
        let header_str = name.as_str();
        let raw = String::from_utf8_lossy(value.as_bytes());
        let display_value = if constants::is_auth_header(header_str) || value.is_sensitive() {
            redact_sensitive_value(&raw)
        } else {
            raw.into_owned()
        };
        debug!(target: "context7::client", "  {}: {}", header_str, display_value);
    }
}

/// Logs an outgoing request.
pub fn log_request(method: &str, url: &str, headers: Option<&HeaderMap>) {
    info!(target: "context7::client", "→ {} {}", method.to_uppercase(), url);

    if let Some(header_map) = headers {
        log_headers("Request", header_map);
    }
}

/// Logs a received response with optional headers and body
pub fn log_response(
    status: u16,
    duration_ms: u128,
    headers: Option<&HeaderMap>,
    body: Option<&str>,
    max_body_len: usize,
) {
    info!(target: "context7::client", "← {} ({}ms)", status, duration_ms);

    if let Some(header_map) = headers {
        log_headers("Response", header_map);
    }

    let Some(body_content) = body else {
        return;
    };

    let (shown, truncated) = truncate_on_char_boundary(body_content, max_body_len);
    if truncated {
        trace!(
            target: "context7::client",
            "Response body: {} (truncated at {} bytes)",
            shown,
            max_body_len
        );
    } else {
        trace!(target: "context7::client", "Response body: {}", shown);
    }
}

/// Cuts `text` to at most `max_len` bytes without splitting a UTF-8 sequence.
fn truncate_on_char_boundary(text: &str, max_len: usize) -> (&str, bool) {
    if text.len() <= max_len {
        return (text, false);
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    (&text[..end], true)
}

/// Gets the maximum logged body length from `CONTEXT7_LOG_MAX_BODY`
#[must_use]
pub fn get_max_body_len() -> usize {
    parse_max_body_len(std::env::var(constants::ENV_LOG_MAX_BODY).ok().as_deref())
}

fn parse_max_body_len(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(constants::DEFAULT_LOG_MAX_BODY)
}
