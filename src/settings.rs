// Settings - policy configuration, persisted as RON

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// What a macro does when one of its children fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Stop at the first failing child; later children do not run
    #[default]
    AbortOnFirst,
    /// Run every child, then report the first failure
    ContinueOnError,
}

/// Library settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Failure handling for macros built with `MacroCommand::from_settings`
    pub macro_failure: FailurePolicy,
}

impl Settings {
    /// Parse settings from a RON string; missing fields take their defaults
    pub fn from_ron(data: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(data)?)
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Load settings from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        Self::from_ron(&data)
    }

    /// Save settings to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }
}
