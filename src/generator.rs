//! Solid-color frame generator.
//!
//! Fills a [`Canvas`] with one fixed color and serializes it to a PNG file.
//! The pipeline is a single linear sequence: validate configuration, allocate
//! the buffer, fill every pixel, encode, write.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::GenerateError;

/// Default output filename. The misspelling is the historical name of the
/// file this tool produces; it is kept deliberately (see DESIGN.md).
pub const DEFAULT_OUTPUT_FILE: &str = "ouput.png";

/// Configuration for one generation run.
///
/// Serde support is a library affordance so callers can load a config from
/// any serde format; the shipped binary only ever uses [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub width: u32,
    pub height: u32,
    pub fill: Rgba,
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            fill: Rgba::opaque(100, 200, 200),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl GeneratorConfig {
    /// Reject configurations no canvas can be built for.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerateError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Fill a fresh canvas with the configured color.
///
/// Visits every (x, y) in bounds; the order does not matter since all pixels
/// receive the same value.
pub fn render(config: &GeneratorConfig) -> Canvas {
    let mut canvas = Canvas::new(config.width, config.height);
    for y in 0..config.height {
        for x in 0..config.width {
            canvas.set_pixel(x, y, config.fill);
        }
    }
    debug!(
        width = config.width,
        height = config.height,
        "canvas filled"
    );
    canvas
}

/// Encode the canvas as PNG and write it to `path`.
///
/// Encoding happens into an in-memory byte stream first, so an encoder
/// failure surfaces as [`GenerateError::Encoding`] and a file-system failure
/// as [`GenerateError::Resource`], never mixed.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), GenerateError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    fs::write(path, &bytes)?;
    Ok(())
}

/// Run the whole pipeline and return the path of the written file.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf, GenerateError> {
    config.validate()?;
    let canvas = render(config);
    write_png(&canvas, &config.output_path)?;
    info!(
        width = config.width,
        height = config.height,
        path = %config.output_path.display(),
        "wrote solid frame"
    );
    Ok(config.output_path.clone())
}
