//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.blade/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".blade")
    }

    /// Get the global config file path (~/.blade/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// The lock file keeps two processes from interleaving writes; the temp
    /// file + rename keeps a crash from leaving a truncated config behind.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_config(path, &content)
    }

    /// Load global configuration from ~/.blade/config.toml.
    /// If no config exists, auto-creates one with defaults.
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::global_config_path())
    }

    /// Load configuration from `path`, creating it with defaults when missing.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::auto_init(path)?;
        }
        Self::from_file(path)
    }

    /// Write the default configuration to `path` unless another process
    /// created it first.
    fn auto_init(path: &Path) -> Result<()> {
        let lock_file = acquire_lock(path)?;

        // Re-check after acquiring the lock
        if path.exists() {
            return Ok(());
        }

        let content = toml::to_string_pretty(&Self::default())
            .with_context(|| "Failed to serialize default config")?;
        write_atomic(path, &content)?;
        drop(lock_file);

        tracing::info!("Created {}", path.display());
        Ok(())
    }
}

/// Write raw config text to `path` atomically while holding the config lock
pub fn write_config(path: &Path, content: &str) -> Result<()> {
    let _lock = acquire_lock(path)?;
    write_atomic(path, content)
}

/// Create the parent directory and take an exclusive lock next to `path`.
/// The lock is released when the returned file is dropped.
fn acquire_lock(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
    }

    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    Ok(lock_file)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    Ok(())
}
