/*!
 * Error types for the tmxalign application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
///
/// The alignment pipeline itself never fails: malformed text simply yields
/// few or zero valid segments. Errors only arise at the file boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// An input path does not reference an existing file
    #[error("Input file does not exist: {}", path.display())]
    MissingFile {
        /// Path that was checked
        path: PathBuf,
    },

    /// An input file's bytes are not valid UTF-8
    #[error("File is not valid UTF-8: {}", path.display())]
    Decoding {
        /// Path of the offending file
        path: PathBuf,
    },

    /// The output file could not be created or written
    #[error("Failed to write output file {}: {message}", path.display())]
    Write {
        /// Output path that failed
        path: PathBuf,
        /// Underlying I/O failure description
        message: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
