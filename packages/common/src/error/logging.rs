//! Structured logging for the playground binary
//!
//! Libraries emit `tracing` events; the binary installs `env_logger` through
//! this type so both `log` and the uniform helpers below end up in one sink.
//! Passwords, private keys and tokens are never logged, only a short SHA-256
//! fingerprint of them.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and message helpers built on `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging to stderr (call once at startup)
    ///
    /// Levels come from `RUST_LOG`:
    /// - `RUST_LOG=info` - recommended
    /// - `RUST_LOG=hashlab_jwt=debug` - per-crate levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging into an append-only file
    ///
    /// The terminal UI owns stdout and stderr while it runs, so anything
    /// written there would corrupt the screen.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file or its parent directory cannot be created.
    pub fn init_to_file(path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        INIT_LOGGER.call_once(move || {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();

            info!("Structured logging initialized (file sink)");
        });
        Ok(())
    }

    /// Initialize logging for tests; safe to call repeatedly
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log terminal and UI setup events
    pub fn log_terminal_setup(event: &str, details: Option<&str>) {
        match details {
            Some(details) => info!("Terminal setup: {event} - {details}"),
            None => info!("Terminal setup: {event}"),
        }
    }

    /// Log a failed primitive operation without echoing its inputs
    pub fn log_operation_error(operation: &str, error: &dyn std::error::Error) {
        error!("Operation failed: {operation} ({error})");
    }

    /// Log an expected negative outcome, like a signature that did not verify
    pub fn log_rejection(operation: &str, reason: &str) {
        warn!("Rejected: {operation} ({reason})");
    }

    /// Log a clipboard write that could not be completed
    pub fn log_clipboard_failure(error: &dyn std::error::Error) {
        warn!(
            "Clipboard write failed (error_type: {}): {error}",
            std::any::type_name_of_val(error)
        );
    }

    /// Log an operation on secret input, identified only by fingerprint
    pub fn log_secret_operation(operation: &str, secret: &str) {
        debug!(
            "Operation: {operation} (input: {})",
            Self::secure_hash_key(secret)
        );
    }

    /// Log cleanup and shutdown problems
    pub fn log_cleanup_warning(component: &str, error: &dyn std::error::Error) {
        warn!("Component cleanup failed: {component} ({error})");
    }

    /// Log performance metrics and timing information
    pub fn log_performance_metric(operation: &str, duration_ms: u64, success: bool) {
        if success {
            debug!("Performance: {operation} completed in {duration_ms}ms");
        } else {
            warn!("Performance: {operation} failed after {duration_ms}ms");
        }
    }

    /// Short SHA-256 fingerprint: `#` followed by 12 hex characters
    #[must_use]
    pub fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_key_hashing() {
        LoggingTransformer::init_test();

        let hash1 = LoggingTransformer::secure_hash_key("correct horse battery staple");
        let hash2 = LoggingTransformer::secure_hash_key("Tr0ub4dor&3");

        assert_ne!(hash1, hash2);
        assert_eq!(
            hash1,
            LoggingTransformer::secure_hash_key("correct horse battery staple")
        );
        assert!(hash1.starts_with('#'));
        assert_eq!(hash1.len(), 13);
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        let err = std::io::Error::other("no display server");
        LoggingTransformer::log_clipboard_failure(&err);
        LoggingTransformer::log_operation_error("bcrypt hash", &err);
        LoggingTransformer::log_rejection("jwt verify", "issuer not accepted");
        LoggingTransformer::log_secret_operation("argon2 hash", "hunter2");
        LoggingTransformer::log_performance_metric("argon2 hash", 42, true);
    }
}
