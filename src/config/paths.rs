//! Path management
//!
//! Resolves where settings and the current plan live on disk.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` / `HELB_BUDGET_DATA_DIR` (handled by the CLI, see [`BudgetPaths::resolve`])
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/helb-budget` or `~/.config/helb-budget`
//! 3. Windows: `%APPDATA%\helb-budget`

use std::path::PathBuf;

use crate::error::BudgetError;

/// Manages all paths used by the budget CLI
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance under the platform config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        Ok(Self {
            base_dir: resolve_default_path()?,
        })
    }

    /// Use `custom` when given, otherwise the platform default
    pub fn resolve(custom: Option<PathBuf>) -> Result<Self, BudgetError> {
        match custom {
            Some(base_dir) if !base_dir.as_os_str().is_empty() => {
                Ok(Self::with_base_dir(base_dir))
            }
            _ => Self::new(),
        }
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the current semester plan
    pub fn plan_file(&self) -> PathBuf {
        self.data_dir().join("plan.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check whether a plan has been created
    pub fn has_plan(&self) -> bool {
        self.plan_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BudgetError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("helb-budget"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("helb-budget"))
}
