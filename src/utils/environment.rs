use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Overrides the data directory
pub const DATA_DIR_ENV: &str = "KC_ANALYZER_DATA_DIR";

/// Overrides the history capacity
pub const CAPACITY_ENV: &str = "KC_ANALYZER_HISTORY_CAPACITY";

const APP_DIR_NAME: &str = "kc-analyzer";

/// Data directory: `$KC_ANALYZER_DATA_DIR`, else the platform data dir
/// (`~/.local/share/kc-analyzer` on Linux, `~/Library/Application Support/kc-analyzer` on macOS)
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Capacity from `$KC_ANALYZER_HISTORY_CAPACITY`, if set
pub fn capacity_from_env() -> Result<Option<usize>> {
    match env::var(CAPACITY_ENV) {
        Ok(raw) => parse_capacity(&raw).map(Some),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Invalid {}", CAPACITY_ENV)),
    }
}

/// Parse a history capacity; zero is rejected
pub fn parse_capacity(raw: &str) -> Result<usize> {
    let capacity: usize =
        raw.trim().parse().with_context(|| format!("Invalid history capacity: {:?}", raw))?;
    if capacity == 0 {
        bail!("History capacity must be at least 1");
    }
    Ok(capacity)
}
