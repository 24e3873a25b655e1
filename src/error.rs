//! Error types for viewspec operations.
//!
//! This module defines [`ViewSpecError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only spec documents and the project config can abort a run
//! - Missing view files and unmapped keys are coverage gaps, not errors
//! - Use `anyhow::Error` (via `ViewSpecError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for viewspec operations.
#[derive(Debug, Error)]
pub enum ViewSpecError {
    /// Spec document not found at expected location.
    #[error("Spec document not found: {path}")]
    SpecNotFound { path: PathBuf },

    /// Spec document is not valid JSON or has an unexpected shape.
    #[error("Failed to parse spec at {path}: {message}")]
    SpecParseError { path: PathBuf, message: String },

    /// Failed to parse the project config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for viewspec operations.
pub type Result<T> = std::result::Result<T, ViewSpecError>;
