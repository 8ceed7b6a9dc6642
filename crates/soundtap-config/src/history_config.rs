//! History configuration file format and operations.

use serde::{Deserialize, Serialize};
use soundtap_core::{InputMode, SampleHistory};
use std::path::Path;

use crate::error::ConfigError;

/// Default ring capacity, one 4096-point FFT window.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Configuration for a [`SampleHistory`].
///
/// # TOML Format
///
/// ```toml
/// capacity = 4096
/// input_mode = "stereo"
/// prefill = true
/// ```
///
/// Every field is optional. `input_mode` is matched case-insensitively and
/// unknown values resolve to mono.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Samples retained per ring, normally the FFT length.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Input mode identifier (`mono`, `stereo`, `left` or `right`).
    #[serde(default = "default_input_mode")]
    pub input_mode: String,

    /// Start with both rings full of silence.
    #[serde(default)]
    pub prefill: bool,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_input_mode() -> String {
    InputMode::default().name().to_lowercase()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            input_mode: default_input_mode(),
            prefill: false,
        }
    }
}

impl HistoryConfig {
    /// Create a configuration with the given capacity and default settings.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Set the input mode.
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode.name().to_lowercase();
        self
    }

    /// Set whether the rings start full of silence.
    pub fn with_prefill(mut self, prefill: bool) -> Self {
        self.prefill = prefill;
        self
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), capacity = config.capacity, "loaded history config");
        Ok(config)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), "saved history config");
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the configured input mode.
    ///
    /// Unknown identifiers fall back to [`InputMode::Mono`] with a warning.
    pub fn input_mode(&self) -> InputMode {
        InputMode::try_from_name(&self.input_mode).unwrap_or_else(|| {
            tracing::warn!(
                input_mode = %self.input_mode,
                "unknown input mode, falling back to mono"
            );
            InputMode::Mono
        })
    }

    /// Check that the configuration can build a history.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }

    /// Build a [`SampleHistory`] from this configuration.
    pub fn build(&self) -> Result<SampleHistory, ConfigError> {
        self.validate()?;

        let history = if self.prefill {
            SampleHistory::zeroed(self.capacity)
        } else {
            SampleHistory::new(self.capacity)
        };
        Ok(history.with_input_mode(self.input_mode()))
    }
}
