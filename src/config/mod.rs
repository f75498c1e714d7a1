use crate::models::StatsConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Name of the optional configuration file in the base directory.
pub const CONFIG_FILE_NAME: &str = "solution-stats.yaml";

/// Configuration manager for the optional `solution-stats.yaml` override.
///
/// The file is never required: without it the built-in folders, language table
/// and ignore list are used.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager rooted at the directory holding the solution folders.
    ///
    /// # Arguments
    /// * `base_dir` - Directory containing the folders, the document and the config file
    pub fn new<P: AsRef<Utf8Path>>(base_dir: P) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        Self {
            config_path: base_dir.join(CONFIG_FILE_NAME),
            base_dir,
        }
    }

    /// Create a ConfigManager for the current working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let base_dir = Utf8PathBuf::try_from(cwd)
            .context("Current directory is not valid UTF-8")?;
        Ok(Self::new(base_dir))
    }

    /// Load the configuration file.
    ///
    /// # Returns
    /// The loaded StatsConfig, or defaults if the file doesn't exist
    pub fn load_config(&self) -> Result<StatsConfig> {
        if !self.config_path.exists() {
            tracing::debug!(
                "No config file at {}, using built-in defaults",
                self.config_path
            );
            return Ok(StatsConfig::default());
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        // An empty file deserializes to unit, not a mapping
        if file_contents.trim().is_empty() {
            return Ok(StatsConfig::default());
        }

        let config: StatsConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Save the configuration file.
    ///
    /// # Arguments
    /// * `config` - The StatsConfig to save
    pub fn save_config(&self, config: &StatsConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}
