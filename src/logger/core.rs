/// Filtering rules and dispatch to the formatter
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Filtering rules:
/// 1. Errors are always shown
/// 2. Verbose requires global --verbose or --verbose-<tag>
/// 3. Level must be within the minimum threshold
/// 4. Debug requires debug mode for that tag
/// 5. If enabled_tags is non-empty, tag must be in the set
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    should_log_with(&get_logger_config(), tag, level)
}

fn should_log_with(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    let key = tag.to_debug_key();

    if level == LogLevel::Error {
        return true;
    }

    // A per-tag verbose flag opts in below the global threshold
    if level == LogLevel::Verbose {
        return config.min_level == LogLevel::Verbose || config.verbose_tags.contains(&key);
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug {
        return config.debug_tags.contains(&key);
    }

    if !config.enabled_tags.is_empty() && !config.enabled_tags.contains(&key) {
        return false;
    }

    true
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_pass() {
        let config = LoggerConfig::from_args(["--quiet"]);
        assert!(should_log_with(&config, &LogTag::Api, LogLevel::Error));
        assert!(!should_log_with(&config, &LogTag::Api, LogLevel::Warning));
    }

    #[test]
    fn test_debug_requires_tag() {
        let config = LoggerConfig::from_args(["--debug-api"]);
        assert!(should_log_with(&config, &LogTag::Api, LogLevel::Debug));
        assert!(!should_log_with(&config, &LogTag::Pool, LogLevel::Debug));
    }

    #[test]
    fn test_verbose_per_tag() {
        let config = LoggerConfig::from_args(["--verbose-pool"]);
        assert!(should_log_with(&config, &LogTag::Pool, LogLevel::Verbose));
        assert!(!should_log_with(&config, &LogTag::Api, LogLevel::Verbose));
    }

    #[test]
    fn test_global_verbose_covers_every_tag() {
        let config = LoggerConfig::from_args(["--verbose", "--verbose-pool"]);
        for tag in LogTag::ALL {
            assert!(should_log_with(&config, &tag, LogLevel::Verbose), "{}", tag);
        }
    }

    #[test]
    fn test_verbose_off_by_default() {
        let config = LoggerConfig::default();
        assert!(!should_log_with(&config, &LogTag::Api, LogLevel::Verbose));
    }

    #[test]
    fn test_enabled_tags_filter() {
        let mut config = LoggerConfig::default();
        config.enabled_tags.insert("api".to_string());
        assert!(should_log_with(&config, &LogTag::Api, LogLevel::Info));
        assert!(!should_log_with(&config, &LogTag::Config, LogLevel::Info));
    }
}
