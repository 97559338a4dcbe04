//! # Toolkit Configuration
//!
//! Runtime settings for the component tree and its widgets. Everything that
//! used to be a compile-time switch (the debug overlay key) lives here so it
//! can be toggled and tested at runtime.

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::ui::input::Key;
use crate::ui::rendering::Font;

/// Toolkit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Log level used by binaries that initialise logging from the config
    pub log_level: String,
    /// Size of the root component in pixels
    pub screen_size: (f32, f32),
    /// Whether the debug key toggles the outline overlay
    pub debug_keys_enabled: bool,
    /// Key that shows the debug overlay while held
    pub debug_key: Key,
    /// Caret blink half-period in milliseconds
    pub caret_blink_interval_ms: f64,
    /// Font used by widgets created without an explicit font
    pub default_font: Font,
    /// Advance width per character for the built-in monospace measurer,
    /// as a fraction of the font size
    pub monospace_advance: f32,
}

impl UiConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            screen_size: (800.0, 600.0),
            debug_keys_enabled: cfg!(debug_assertions),
            debug_key: Key::LeftCtrl,
            caret_blink_interval_ms: 600.0,
            default_font: Font::new("Consolas", 16.0),
            monospace_advance: 0.5,
        }
    }

    /// Set the screen size
    pub fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.screen_size = (width, height);
        self
    }

    /// Enable or disable the debug overlay key
    pub fn with_debug_keys(mut self, enabled: bool) -> Self {
        self.debug_keys_enabled = enabled;
        self
    }

    /// Set the caret blink interval
    pub fn with_caret_blink_interval(mut self, interval_ms: f64) -> Self {
        self.caret_blink_interval_ms = interval_ms;
        self
    }

    /// Set the default font
    pub fn with_default_font(mut self, font: Font) -> Self {
        self.default_font = font;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = self.screen_size;
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be positive, got {width}x{height}"
            )));
        }

        if self.caret_blink_interval_ms <= 0.0 {
            return Err(ConfigError::Invalid("caret blink interval must be positive".to_string()));
        }

        if self.default_font.size <= 0.0 {
            return Err(ConfigError::Invalid("default font size must be positive".to_string()));
        }

        if self.monospace_advance <= 0.0 {
            return Err(ConfigError::Invalid("monospace advance must be positive".to_string()));
        }

        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for UiConfig {}
