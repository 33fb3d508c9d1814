//! Runtime configuration
//!
//! Each setting resolves in order: command-line flag, environment variable, default.

use std::path::PathBuf;

use anyhow::Result;

use crate::history::{DEFAULT_CAPACITY, DEFAULT_HISTORY_KEY, HistoryConfig};
use crate::theme::DEFAULT_THEME_KEY;
use crate::utils::{capacity_from_env, get_data_dir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one file per storage slot
    pub data_dir: PathBuf,
    pub history: HistoryConfig,
    pub theme_key: String,
}

impl AppConfig {
    /// Resolve the configuration from optional flag values and the environment
    pub fn resolve(data_dir: Option<PathBuf>, capacity: Option<usize>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => get_data_dir()?,
        };
        let capacity = match capacity {
            Some(capacity) => capacity,
            None => capacity_from_env()?.unwrap_or(DEFAULT_CAPACITY),
        };

        Ok(Self {
            data_dir,
            history: HistoryConfig::new(DEFAULT_HISTORY_KEY, capacity),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        })
    }
}
