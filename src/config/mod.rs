//! Generator hand-off configuration.
//!
//! The project generator records its inputs in a JSON file; this tool
//! reads only the target name, which determines the generated
//! `.emProject` file name. Everything else in the file is ignored.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error types for config operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Target section of the generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Target name, e.g. "light_switch.server.nrf52832_xxAA.s132.7.2.0".
    pub name: String,
}

/// The slice of the generator's JSON configuration this tool consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub target: TargetConfig,
}

impl GeneratorConfig {
    /// Load and parse config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse config from a JSON string.
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.name.is_empty() {
            return Err(ConfigError::Validation(
                "target name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Location of the generated project file under `out_dir`.
    ///
    /// Dots in the target name become underscores in the file stem, as
    /// the generator writes it.
    pub fn emproject_path(&self, out_dir: &Path) -> PathBuf {
        let stem = self.target.name.replace('.', "_");
        out_dir.join(format!("{}.emProject", stem))
    }
}
