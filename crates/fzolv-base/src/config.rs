use anyhow::{anyhow, Result};
use log::LevelFilter;

use crate::logging::{default_level, install};

pub const LOG_LEVEL_VAR: &str = "FZOLV_LOG_LEVEL";

/// Configuration for the global logger.
#[derive(Clone, Debug)]
pub struct LogConfig {
    level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Build from `FZOLV_LOG_LEVEL`. An unset variable keeps the default.
    pub fn from_env() -> Result<Self> {
        let level = std::env::var(LOG_LEVEL_VAR).ok();
        Self::from_vars(level.as_deref())
    }

    /// Build from an already-read variable value. An empty string counts as unset.
    pub fn from_vars(level: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(level) = level.filter(|level| !level.is_empty()) {
            let level = level
                .parse::<LevelFilter>()
                .map_err(|_| anyhow!("invalid {} value {:?}", LOG_LEVEL_VAR, level))?;
            config = config.with_level(level);
        }
        Ok(config)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

/// Install the stdout logger at the configured level. Only the first install per process has an effect.
pub fn init_logger(config: &LogConfig) {
    install(config.level());
    log::debug!("logging at {}", config.level());
}
