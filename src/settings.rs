//! Board configuration.
//!
//! Settings are plain JSON. Every field has a default, so an empty object is
//! a valid configuration:
//!
//! ```json
//! {
//!   "sizing": { "max_width": 360.0 },
//!   "log_filter": "stickyboard=debug"
//! }
//! ```

use crate::constants::DEFAULT_LOG_FILTER;
use crate::sizing::SizingRules;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but describe an unusable configuration
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Auto-resize rules
    pub sizing: SizingRules,
    /// `EnvFilter` directive used by `logging::init_logging`
    pub log_filter: String,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            sizing: SizingRules::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BoardSettings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: BoardSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        self.sizing.validate().map_err(SettingsError::Invalid)?;
        if self.log_filter.trim().is_empty() {
            return Err(SettingsError::Invalid("log_filter must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
