//! Custom error types for ssimcheck.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ssimcheck library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load an image file. Covers both a missing file and a file
    /// that is present but not decodable; the two causes are not
    /// distinguished.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The similarity metric failed, e.g. the two images differ in shape.
    #[error("similarity computation failed: {source}")]
    Similarity {
        #[source]
        source: image_compare::CompareError,
    },
}

/// Result type alias for ssimcheck operations.
pub type Result<T> = std::result::Result<T, Error>;
