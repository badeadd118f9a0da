use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::ui::theme::ThemeMode;

/// Display currency. Stored amounts are divided by `rate` before they are
/// shown with `symbol`; the bundled data is in rupiah and shown in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Currency {
    pub(crate) symbol: String,
    pub(crate) rate: f64,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            rate: 15_000.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) theme: ThemeMode,
    #[serde(default)]
    pub(crate) currency: Currency,
    /// CSV file to read transactions from instead of the sample data.
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,
}

impl Config {
    pub(crate) fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "finboard", "finboard")
            .context("Could not determine project directories")
    }

    pub(crate) fn default_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.yaml"))
    }

    /// A missing file yields the defaults.
    pub(crate) fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        if !(config.currency.rate.is_finite() && config.currency.rate > 0.0) {
            anyhow::bail!(
                "currency.rate must be a positive number, got {} in {}",
                config.currency.rate,
                path.display()
            );
        }
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Config for this session and the path changes may be saved to. A file
    /// that fails to load is never written back: the session runs on the
    /// defaults and the returned path is `None`.
    pub(crate) fn load_or_default(path: PathBuf) -> (Self, Option<PathBuf>) {
        match Self::load_from_path(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                warn!(error = ?e, path = %path.display(), "config not loaded, using defaults");
                (Self::default(), None)
            }
        }
    }

    pub(crate) fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }
        let raw = serde_yaml::to_string(self).context("Failed to serialize config")?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
