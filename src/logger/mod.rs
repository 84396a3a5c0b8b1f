//! Structured, tag-based logging for the Meteora client
//!
//! ## Usage
//!
//! ```rust
//! use meteora_client::logger::{self, LogTag};
//!
//! logger::warning(LogTag::Api, "Pair lookup failed");
//! logger::info(LogTag::Config, "Loaded meteora.toml");
//! logger::debug(LogTag::Api, "GET https://app.meteora.ag/clmm-api/pair/..."); // Only with --debug-api
//! logger::verbose(LogTag::Pool, "Pool state: ..."); // Only with --verbose
//! ```
//!
//! ## Initialization
//!
//! Binaries embedding the client call `logger::init()` once at startup to pick
//! up `--debug-<tag>`, `--verbose`, `--verbose-<tag>` and `--quiet` flags.
//! Libraries and tests can use `set_logger_config` instead.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{
    get_logger_config, init_from_args, set_logger_config, update_logger_config, LoggerConfig,
};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line arguments
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the tag has debug enabled, e.g. `--debug-api` for
/// `LogTag::Api`.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (--verbose or --verbose-<tag>)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
