//! Shared test utilities

use std::path::PathBuf;

/// Cached binary path for the context7 CLI to avoid repeated lookups
#[allow(deprecated)]
pub static CONTEXT7_BIN: std::sync::LazyLock<PathBuf> =
    std::sync::LazyLock::new(|| assert_cmd::cargo::cargo_bin("context7"));

/// Command for the built binary with every `CONTEXT7_*` variable cleared,
/// so the developer's shell cannot leak an API key or base URL into a test.
pub fn context7_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(&*CONTEXT7_BIN);
    for var in [
        "CONTEXT7_API_KEY",
        "CONTEXT7_BASE_URL",
        "CONTEXT7_TIMEOUT_SECS",
        "CONTEXT7_LOG",
        "CONTEXT7_LOG_FORMAT",
        "CONTEXT7_LOG_FILE",
        "CONTEXT7_LOG_MAX_BODY",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Same as [`context7_cmd`] but pointed at a mock server.
pub fn context7_cmd_for(base_url: &str) -> assert_cmd::Command {
    let mut cmd = context7_cmd();
    cmd.env("CONTEXT7_BASE_URL", base_url);
    cmd
}
