//! Error taxonomy for frame generation.

use thiserror::Error;

/// Everything that can go wrong between configuration and the output file.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Canvas dimensions must both be positive.
    #[error("invalid canvas dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// The output file could not be created or written.
    #[error("failed to write output file: {0}")]
    Resource(#[from] std::io::Error),

    /// The encoder rejected the canvas.
    #[error("failed to encode canvas as PNG: {0}")]
    Encoding(#[from] image::ImageError),
}
