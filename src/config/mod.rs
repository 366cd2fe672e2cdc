use crate::models::HarvestSettings;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "harvester.yaml";

/// Loads and saves the optional YAML settings file.
///
/// The file is layered over [`HarvestSettings::default`] through the `config` crate, so it
/// only needs to name the keys it overrides. A missing file is not an error.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings_path: Utf8PathBuf,
}

impl SettingsManager {
    /// Create a manager for the settings file at `settings_path`.
    pub fn new<P: AsRef<Utf8Path>>(settings_path: P) -> Self {
        Self {
            settings_path: settings_path.as_ref().to_path_buf(),
        }
    }

    /// Load settings, falling back to defaults for the file or any key it omits.
    ///
    /// # Errors
    /// Fails if the file exists but is not valid YAML or has mistyped keys.
    pub fn load_settings(&self) -> Result<HarvestSettings> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
            return Ok(HarvestSettings::default());
        }

        let settings: HarvestSettings = ::config::Config::builder()
            .add_source(
                ::config::File::new(self.settings_path.as_str(), ::config::FileFormat::Yaml)
                    .required(false),
            )
            .build()
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!("Loaded settings from {}", self.settings_path);
        Ok(settings)
    }

    /// Write `settings` as YAML, creating the parent directory if needed.
    pub fn save_settings(&self, settings: &HarvestSettings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            if !parent.as_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create settings directory: {}", parent))?;
            }
        }

        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new(SETTINGS_FILE)
    }
}
