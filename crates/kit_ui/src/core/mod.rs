//! # Core Module
//!
//! Shared abstractions used by the rest of the toolkit.
//!
//! ## Organization
//!
//! - **Config**: Toolkit configuration (debug overlay, caret timing, fonts)

pub mod config;

pub use config::UiConfig;
pub use crate::config::{Config, ConfigError};
