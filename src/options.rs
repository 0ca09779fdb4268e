use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{OverlayError, Result};

/// Default penalty, in weight units, for leaving or entering a snapped point
/// over an unfavored edge direction.
pub const DEFAULT_HEADING_PENALTY: f64 = 300.0;

/// Tunables for searches running over an overlay.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayOptions {
    /// Weight added to an edge direction flagged as unfavored.
    pub heading_penalty: f64,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self {
            heading_penalty: DEFAULT_HEADING_PENALTY,
        }
    }

    /// Sets the heading penalty.
    pub fn heading_penalty(mut self, penalty: f64) -> Self {
        self.heading_penalty = penalty;
        self
    }

    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.heading_penalty.is_finite() || self.heading_penalty < 0.0 {
            return Err(OverlayError::InvalidArgument(format!(
                "heading_penalty must be finite and non-negative, got {}",
                self.heading_penalty
            )));
        }
        Ok(())
    }

    /// Parses options from TOML text; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: OverlayOptions =
            toml::from_str(text).map_err(|err| OverlayError::Config(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reads and parses an options file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let options = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            heading_penalty = options.heading_penalty,
            "overlay options loaded"
        );
        Ok(options)
    }
}
