//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the toolkit:
//! - Math types and box geometry
//! - Frame time management
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
