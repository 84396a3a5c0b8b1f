/// Client configuration
///
/// `MeteoraClient::new` only needs a base URL; everything else falls back to
/// the defaults below. A TOML file can override any subset of them:
///
/// ```toml
/// base_url = "https://app.meteora.ag"
/// timeout_ms = 5000
/// ```
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::logger::{self, LogTag};

pub mod macros;

pub const DEFAULT_BASE_URL: &str = "https://app.meteora.ag";

/// Total per-request timeout baked into every pooled client
pub const REQUEST_TIMEOUT_MS: u64 = 5000;

/// Browser User-Agent sent with pair quotes; the upstream rejects bare clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

crate::config_struct! {
    pub struct MeteoraConfig {
        base_url: String = DEFAULT_BASE_URL.to_string(),
        timeout_ms: u64 = REQUEST_TIMEOUT_MS,
        user_agent: String = DEFAULT_USER_AGENT.to_string(),
    }
}

impl MeteoraConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            anyhow::bail!("timeout_ms must be greater than zero");
        }
        if self.base_url.is_empty() {
            anyhow::bail!("base_url is required");
        }
        Ok(())
    }
}

/// Load a config file; missing keys take their defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MeteoraConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: MeteoraConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    logger::debug(
        LogTag::Config,
        &format!(
            "Loaded config from {} (base_url={}, timeout_ms={})",
            path.display(),
            config.base_url,
            config.timeout_ms
        ),
    );

    Ok(config)
}
