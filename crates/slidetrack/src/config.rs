//! Track configuration.
//!
//! [`TrackConfig`] carries the user-experience tuning of a track: how fast the
//! track follows the pointer, how far a drag must travel to change slides, and
//! how long resize activity must settle before geometry is rebuilt.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```
//! use slidetrack::TrackConfig;
//!
//! let config = TrackConfig::from_toml_str(
//!     r#"
//!     start_index = 2
//!     change_threshold = 80.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.start_index, 2);
//! assert_eq!(config.acceleration, slidetrack::config::DEFAULT_ACCELERATION);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Factor applied to raw pointer travel so the track moves faster than the pointer.
pub const DEFAULT_ACCELERATION: f32 = 1.6;

/// Pixels of raw pointer travel required for a release to change slides.
pub const DEFAULT_CHANGE_THRESHOLD: f32 = 120.0;

/// Quiet period before a burst of resize notifications rebuilds geometry.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Tuning and start-up options for a [`Track`](crate::Track).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Slide activated by `init()`.
    pub start_index: usize,
    /// Multiplier from pointer displacement to track displacement.
    pub acceleration: f32,
    /// Minimum absolute displacement (in pixels) that changes the slide on release.
    pub change_threshold: f32,
    /// Resize debounce delay in milliseconds.
    pub resize_debounce_ms: u64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            start_index: 0,
            acceleration: DEFAULT_ACCELERATION,
            change_threshold: DEFAULT_CHANGE_THRESHOLD,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl TrackConfig {
    /// Create a configuration with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start index using builder pattern.
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// Set the drag acceleration using builder pattern.
    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set the slide-change threshold using builder pattern.
    pub fn with_change_threshold(mut self, threshold: f32) -> Self {
        self.change_threshold = threshold;
        self
    }

    /// Set the resize debounce delay using builder pattern.
    pub fn with_resize_debounce(mut self, delay: Duration) -> Self {
        self.resize_debounce_ms = delay.as_millis() as u64;
        self
    }

    /// The resize debounce delay.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.acceleration.is_finite() || self.acceleration <= 0.0 {
            return Err(Error::invalid_config(
                "acceleration",
                format!("expected a positive finite number, got {}", self.acceleration),
            ));
        }
        if !self.change_threshold.is_finite() || self.change_threshold < 0.0 {
            return Err(Error::invalid_config(
                "change_threshold",
                format!(
                    "expected a non-negative finite number, got {}",
                    self.change_threshold
                ),
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from a TOML document.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }
}
