//! Error types for frameviz operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in frameviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// GIF encoding error.
    #[error("GIF encoding error: {0}")]
    GifEncoding(#[from] image::ImageError),

    /// Geometry does not satisfy the primitive kind's shape contract.
    #[error("shape mismatch: {kind} requires at least {required} vertices, got {found}")]
    ShapeMismatch {
        /// Primitive kind that rejected the geometry.
        kind: &'static str,
        /// Minimum vertex count the kind requires.
        required: usize,
        /// Vertex count that was supplied.
        found: usize,
    },

    /// Animation was requested before any frame boundary was recorded.
    #[error("no frames were recorded")]
    NoFrames,

    /// Animation export was requested before an animation was built.
    #[error("no animation has been built")]
    NoAnimation,

    /// Plot load was requested on a path that does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Explicitly unsupported operation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Color parsing error.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Invalid dimensions for a raster surface.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Malformed line in saved plot data.
    #[error("malformed plot data at line {line}: {message}")]
    PlotFormat {
        /// 1-based line number in the file.
        line: usize,
        /// What went wrong on that line.
        message: String,
    },
}
