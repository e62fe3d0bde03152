//! Process configuration read from the environment.
//!
//! - `TUI_2048_SEED`: u64 seed for a reproducible game (default: entropy)
//! - `TUI_2048_LOG_PATH`: write logs to this file (default: logging off)
//! - `TUI_2048_LOG_LEVEL`: `off|error|warn|info|debug|trace` (default: `info`)

use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("TUI_2048_SEED").and_then(|s| s.parse().ok());
        let log_path = non_empty("TUI_2048_LOG_PATH").map(PathBuf::from);
        let log_level = non_empty("TUI_2048_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::INFO);

        Self {
            seed,
            log_path,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
