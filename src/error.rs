use crate::constants;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
    /// The server answered with a status the client does not treat as success.
    #[error("{}", status_message(*.status))]
    HttpStatus { status: u16, body: String },
    /// DNS, connect, timeout and body-read failures.
    #[error("Connection failed - {reason}")]
    Connection { reason: String },
    #[error("Unexpected response from server - {reason}")]
    InvalidResponse { reason: String },
}

/// JSON representation of an error for structured output
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub error_type: String,
    pub message: String,
    pub details: Option<String>,
    pub status: Option<u16>,
}

/// A non-success HTTP answer reduced to what the user gets to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub status: u16,
    pub detail: Option<String>,
}

impl ErrorReport {
    /// Builds a report, pulling the server's `message` field out of a JSON body if there is one.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self {
            status,
            detail: extract_detail_message(body),
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        status_message(self.status)
    }
}

/// Maps an HTTP status code to a human-readable explanation.
#[must_use]
pub fn status_message(status: u16) -> String {
    let known = match status {
        202 => constants::ERR_STATUS_202,
        301 => constants::ERR_STATUS_301,
        400 => constants::ERR_STATUS_400,
        401 => constants::ERR_STATUS_401,
        403 => constants::ERR_STATUS_403,
        404 => constants::ERR_STATUS_404,
        422 => constants::ERR_STATUS_422,
        429 => constants::ERR_STATUS_429,
        500 => constants::ERR_STATUS_500,
        503 => constants::ERR_STATUS_503,
        _ => return format!("HTTP {status}"),
    };
    known.to_string()
}

/// Best-effort extraction of `{"message": ...}` from an error body.
///
/// Bodies that are not JSON, or JSON that is not an object, yield `None`.
#[must_use]
pub fn extract_detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

impl Error {
    /// Convert error to JSON representation for structured output
    #[must_use]
    pub fn to_json(&self) -> JsonError {
        let (error_type, details, status) = match self {
            Self::Config(_) => ("Configuration", None, None),
            Self::HttpStatus { status, body } => {
                ("HttpStatus", extract_detail_message(body), Some(*status))
            }
            Self::Connection { .. } => ("Connection", None, None),
            Self::InvalidResponse { .. } => ("InvalidResponse", None, None),
        };

        let message = match self {
            Self::Config(msg) => msg.clone(),
            _ => self.to_string(),
        };

        JsonError {
            error_type: error_type.to_string(),
            message,
            details,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_table() {
        let table = [
            (202, "Library not fully indexed yet. Try again later."),
            (301, "Library has been moved. Check the response for the new ID."),
            (400, "Invalid request parameters. Check your query."),
            (401, "Invalid API key. Check your CONTEXT7_API_KEY."),
            (403, "Access denied. You may not have permission for this library."),
            (404, "Library not found. Use 'search' to find the correct ID."),
            (422, "Library is too large or has no processable code."),
            (
                429,
                "Rate limit exceeded. Wait a moment and try again, or add an API key.",
            ),
            (500, "Server error. Try again later."),
            (503, "Service unavailable. Try again later."),
        ];
        for (status, expected) in table {
            assert_eq!(status_message(status), expected, "status {status}");
        }
    }

    #[test]
    fn test_status_message_fallback() {
        assert_eq!(status_message(418), "HTTP 418");
        assert_eq!(status_message(502), "HTTP 502");
    }

    #[test]
    fn test_extract_detail_message() {
        assert_eq!(
            extract_detail_message(r#"{"message": "Library /foo/bar does not exist"}"#),
            Some("Library /foo/bar does not exist".to_string())
        );
        assert_eq!(
            extract_detail_message(r#"{"message": 42}"#),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_extract_detail_message_ignores_unparseable_bodies() {
        assert_eq!(extract_detail_message(""), None);
        assert_eq!(extract_detail_message("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail_message(r#"["message"]"#), None);
        assert_eq!(extract_detail_message(r#"{"error": "nope"}"#), None);
    }

    #[test]
    fn test_http_status_display_uses_table() {
        let err = Error::HttpStatus {
            status: 404,
            body: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "Library not found. Use 'search' to find the correct ID."
        );
    }

    #[test]
    fn test_to_json_http_status() {
        let err = Error::HttpStatus {
            status: 429,
            body: r#"{"message": "slow down"}"#.to_string(),
        };
        let json = err.to_json();
        assert_eq!(json.error_type, "HttpStatus");
        assert_eq!(json.status, Some(429));
        assert_eq!(json.details.as_deref(), Some("slow down"));
    }

    #[test]
    fn test_to_json_connection() {
        let err = Error::Connection {
            reason: "connection refused".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json.error_type, "Connection");
        assert_eq!(json.message, "Connection failed - connection refused");
        assert_eq!(json.status, None);
    }
}
