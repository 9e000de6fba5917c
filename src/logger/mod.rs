//! Logger module
//!
//! Dumps evaluation traffic for the platform's log collector:
//! - The incoming viewer event
//! - The rewritten request or constructed redirect response
//! - A sentinel line when no rule matched
//!
//! Output goes to stdout as indented JSON so nested records stay readable.
//! Everything is suppressed under test execution (`cfg(test)` or
//! `REWRITER_ENV=test`) and when disabled via configuration; evaluation never
//! depends on the logger.

use chrono::Local;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::config::LoggingConfig;
use crate::event::{EdgeRequest, EdgeResponse, ViewerEvent};

/// Global logging switch, read lock-free on every emission
static ENABLED: AtomicBool = AtomicBool::new(true);

/// Whether `REWRITER_ENV=test` was set, read from the environment once
static TEST_MODE: OnceLock<bool> = OnceLock::new();

/// Initialize the logger with configuration
///
/// Should be called once at handler construction; calling again just moves
/// the switch.
pub fn init(config: &LoggingConfig) {
    ENABLED.store(config.enabled, Ordering::Relaxed);
}

/// Check whether the process runs in test mode
///
/// The environment is consulted on first call only; the platform does not
/// change it mid-process.
fn is_test_mode() -> bool {
    *TEST_MODE.get_or_init(|| std::env::var("REWRITER_ENV").as_deref() == Ok("test"))
}

/// Check whether log output is currently emitted
fn is_enabled() -> bool {
    if cfg!(test) || is_test_mode() {
        return false;
    }
    ENABLED.load(Ordering::Relaxed)
}

/// Write a timestamped line to stdout
fn write_info(message: &str) {
    println!("[{}] {message}", Local::now().format("%d/%b/%Y:%H:%M:%S %z"));
}

/// Dump a value as indented JSON
fn log_json<T: Serialize>(value: &T) {
    if !is_enabled() {
        return;
    }
    match serde_json::to_string_pretty(value) {
        Ok(dump) => write_info(&dump),
        Err(e) => write_info(&format!("[ERROR] Failed to serialize log entry: {e}")),
    }
}

/// Log the incoming viewer event before evaluation
pub fn log_event(event: &ViewerEvent) {
    log_json(event);
}

/// Log the mutated request produced by a rewrite
pub fn log_request(request: &EdgeRequest) {
    log_json(request);
}

/// Log the response produced by a redirect
pub fn log_response(response: &EdgeResponse) {
    log_json(response);
}

/// Record that no rule matched and the request passed through untouched
pub fn log_no_match() {
    if is_enabled() {
        write_info("no match");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppressed_under_test_execution() {
        init(&LoggingConfig { enabled: true });
        assert!(!is_enabled());
    }

    #[test]
    fn test_env_gate_read_once() {
        // Changing the variable after the first check has no effect
        let initial = is_test_mode();
        std::env::set_var("REWRITER_ENV", "test");
        assert_eq!(is_test_mode(), initial);
        std::env::remove_var("REWRITER_ENV");
        assert_eq!(is_test_mode(), initial);
    }

    #[test]
    fn test_log_calls_are_panic_free() {
        init(&LoggingConfig { enabled: true });
        log_event(&ViewerEvent::from_request(EdgeRequest::new("/a")));
        log_request(&EdgeRequest::new("/b"));
        log_response(&crate::http::build_redirect("/c"));
        log_no_match();

        init(&LoggingConfig { enabled: false });
        log_no_match();
    }
}
