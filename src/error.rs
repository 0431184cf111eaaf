use std::path::PathBuf;

use thiserror::Error;
use tint_core::{ParseColorError, ScaleError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid scale bounds: {0}")]
    Scale(#[from] ScaleError),

    #[error("Invalid color: {0}")]
    Color(#[from] ColorLookupError),
}

#[derive(Debug, Error)]
pub enum ColorLookupError {
    #[error("'{input}' is neither a named color nor a hex value ({source})")]
    Unresolved {
        input: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Named color '{name}' has an invalid value '{value}' ({source})")]
    InvalidNamed {
        name: String,
        value: String,
        #[source]
        source: ParseColorError,
    },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read gesture script {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gesture script: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Gesture script has no events")]
    Empty,
}
