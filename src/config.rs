use crate::domain::{Category, Priority};
use crate::error::{Error, Result};
use crate::notifications::Permission;
use crate::ticker::{DEFAULT_SCAN_SECS, DEFAULT_WINDOW_MINS};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::debug;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds between due-soon scans
    pub scan_interval_secs: u64,
    /// How far ahead of the due instant the reminder fires
    pub due_soon_window_mins: i64,
    /// `null` until the user decides, then true/false
    pub notifications: Option<bool>,
    /// Timezone label prefilled in the form
    pub default_timezone: String,
    pub default_priority: Priority,
    pub default_category: Category,
    pub use_emoji: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_interval_secs: DEFAULT_SCAN_SECS,
            due_soon_window_mins: DEFAULT_WINDOW_MINS,
            notifications: None,
            default_timezone: default_timezone(),
            default_priority: Priority::Medium,
            default_category: Category::SelfWork,
            use_emoji: true,
        }
    }
}

/// Longest accepted scan period (one day)
pub const MAX_SCAN_SECS: u64 = 86_400;

/// Longest accepted due-soon window (one day)
pub const MAX_WINDOW_MINS: i64 = 24 * 60;

impl Config {
    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs.clamp(1, MAX_SCAN_SECS))
    }

    pub fn due_soon_window(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.due_soon_window_mins.clamp(1, MAX_WINDOW_MINS))
    }

    pub fn permission(&self) -> Permission {
        Permission::from_setting(self.notifications)
    }
}

fn default_timezone() -> String {
    std::env::var("TZ")
        .ok()
        .filter(|tz| !tz.trim().is_empty())
        .unwrap_or_else(|| "Local".to_string())
}

/// Default config location: <config dir>/doit/config.json
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(Error::NoConfigDir)?;
    Ok(dir.join("doit").join("config.json"))
}

/// Load config from a file. A missing file yields defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content).map_err(|source| Error::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Write a default config file, refusing to overwrite an existing one
pub fn init_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if path.exists() {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }

    let config = Config::default();
    save_config(path, &config)?;
    Ok(config)
}

/// Write config atomically (temp file in the same directory, then rename)
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(config).map_err(|source| Error::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(json.as_bytes())?;
    temp.flush()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
