//! Platform-specific directory lookup.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{BsError, BsResult};

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the current platform at compile time.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Get the platform-specific configuration directory.
    ///
    /// - Windows: `%APPDATA%/bookstack`
    /// - macOS: `~/Library/Application Support/bookstack`
    /// - Linux: `~/.config/bookstack`
    pub fn config_dir() -> BsResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| BsError::Config("could not determine config directory".into()))?;
        Ok(base.join(APP_NAME))
    }

    /// Get the platform-specific data directory (logs live here).
    pub fn data_dir() -> BsResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| BsError::Config("could not determine data directory".into()))?;
        Ok(base.join(APP_NAME))
    }

    /// Get a human-readable platform name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }
}
