//! Crate-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::ui::{RenderError, TreeError};

/// Any error the toolkit can report
#[derive(Error, Debug)]
pub enum KitError {
    /// Rejected structural mutation
    #[error("Structural error: {0}")]
    Tree(#[from] TreeError),

    /// Drawing failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration could not be loaded, saved or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
