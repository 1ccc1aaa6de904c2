//! Notebook configuration.
//!
//! A notebook is described by a small YAML file naming the notebook and
//! pointing at the occurrence records emitted by the Markdown collaborator.
//! The file is read once when a notebook session is opened.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, NotelinksError};

/// Settings for one open notebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookConfig {
    /// Display name of the notebook.
    pub name: String,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Occurrence records file, relative to the config file's directory.
    #[serde(default = "default_mentions")]
    pub mentions: PathBuf,
}

fn default_mentions() -> PathBuf {
    PathBuf::from("mentions.json")
}

impl NotebookConfig {
    /// Config with the given name and defaults for everything else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            mentions: default_mentions(),
        }
    }

    /// Parse and validate a config from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML and
    /// [`ConfigError::MissingName`] when the name is blank.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.name = config.name.trim().to_string();
        if config.name.is_empty() {
            return Err(ConfigError::MissingName);
        }
        Ok(config)
    }

    /// Read a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`NotelinksError::Io`] if the file cannot be read, or
    /// [`NotelinksError::Config`] if it is invalid.
    pub fn load(path: &Path) -> Result<Self, NotelinksError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml_str(&text)?)
    }

    /// Absolute location of the occurrence records file.
    pub fn mentions_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.mentions)
    }
}
