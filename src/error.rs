//! Error types for the outliner library.

use std::io;
use thiserror::Error;

/// Result type alias for outliner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the file pipeline and renderers.
///
/// Outline inference itself never fails: degenerate input produces a
/// structurally valid, possibly empty outline instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed fragment dump.
    #[error("Fragment dump error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fragment violated the extractor contract (strict loading mode).
    #[error("Invalid fragment: {0}")]
    InvalidFragment(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}
