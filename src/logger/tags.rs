/// Log tags identify the subsystem a message comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    Api,
    Pool,
    Config,
}

impl LogTag {
    pub const ALL: [LogTag; 3] = [LogTag::Api, LogTag::Pool, LogTag::Config];

    /// Key used by `--debug-<key>` / `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::Api => "api",
            LogTag::Pool => "pool",
            LogTag::Config => "config",
        }
        .to_string()
    }

    /// Uncolored label for console alignment
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::Api => "API",
            LogTag::Pool => "POOL",
            LogTag::Config => "CONFIG",
        }
    }

    pub fn from_debug_key(key: &str) -> Option<LogTag> {
        LogTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.to_debug_key() == key)
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
