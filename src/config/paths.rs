//! Path management for receipt-cli
//!
//! Provides XDG-compliant path resolution for configuration and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `RECEIPT_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/receipt-cli` or `~/.config/receipt-cli`
//! 3. Windows: `%APPDATA%\receipt-cli`

use std::path::PathBuf;

use crate::error::ReceiptError;

/// Manages all paths used by receipt-cli
#[derive(Debug, Clone)]
pub struct ReceiptPaths {
    /// Base directory for all receipt-cli data
    base_dir: PathBuf,
}

impl ReceiptPaths {
    /// Create a new ReceiptPaths instance
    ///
    /// Path resolution:
    /// 1. `RECEIPT_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/receipt-cli` or `~/.config/receipt-cli`
    /// 3. Windows: `%APPDATA%\receipt-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ReceiptError> {
        let base_dir = if let Ok(custom) = std::env::var("RECEIPT_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ReceiptPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/receipt-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the session log
    pub fn session_log(&self) -> PathBuf {
        self.base_dir.join("sessions.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ReceiptError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReceiptError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if receipt-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReceiptError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("receipt-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReceiptError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ReceiptError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("receipt-cli"))
}
