/// Runtime logger configuration
///
/// Held in a process-wide lock so filtering decisions can be made from any
/// thread without passing the config around.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    /// Tags with DEBUG output enabled (debug keys, e.g. "api")
    pub debug_tags: HashSet<String>,
    pub verbose_tags: HashSet<String>,
    /// Empty set means every tag is enabled
    pub enabled_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            enabled_tags: HashSet::new(),
        }
    }
}

impl LoggerConfig {
    /// Build a config from command-line style arguments
    ///
    /// Recognized: `--quiet`, `--verbose`, `--debug-<tag>`, `--verbose-<tag>`.
    /// Unknown flags are ignored so the host binary keeps its own arguments.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = LoggerConfig::default();

        for arg in args {
            let arg = arg.as_ref();
            if arg == "--quiet" {
                config.min_level = LogLevel::Error;
            } else if arg == "--verbose" {
                config.min_level = LogLevel::Verbose;
            } else if let Some(key) = arg.strip_prefix("--debug-") {
                if LogTag::from_debug_key(key).is_some() {
                    config.debug_tags.insert(key.to_string());
                    if config.min_level < LogLevel::Debug {
                        config.min_level = LogLevel::Debug;
                    }
                }
            } else if let Some(key) = arg.strip_prefix("--verbose-") {
                if LogTag::from_debug_key(key).is_some() {
                    config.verbose_tags.insert(key.to_string());
                    config.debug_tags.insert(key.to_string());
                    if config.min_level < LogLevel::Debug {
                        config.min_level = LogLevel::Debug;
                    }
                }
            }
        }

        config
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}

pub fn update_logger_config<F>(update: F)
where
    F: FnOnce(&mut LoggerConfig),
{
    update(&mut *LOGGER_CONFIG.write());
}

pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(std::env::args().skip(1)));
}
