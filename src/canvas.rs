//! In-memory 2D pixel buffer with fixed dimensions.

use crate::color::Rgba;

/// A dense RGBA pixel buffer.
///
/// Dimensions are immutable after creation. Storage is row-major RGBA bytes,
/// the layout the PNG encoder consumes directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Create a canvas with every pixel initialized to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} canvas",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&color.channels());
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = self.offset(x, y);
        Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_has_width_times_height_pixels() {
        let canvas = Canvas::new(13, 7);
        assert_eq!(canvas.pixel_count(), 13 * 7);
        assert_eq!(canvas.as_raw().len(), 13 * 7 * 4);
    }

    #[test]
    fn test_set_and_read_back_pixel() {
        let mut canvas = Canvas::new(4, 4);
        let color = Rgba::new(10, 20, 30, 40);
        canvas.set_pixel(3, 1, color);
        assert_eq!(canvas.pixel(3, 1), color);
        // Neighbors untouched
        assert_eq!(canvas.pixel(2, 1), Rgba::new(0, 0, 0, 0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_pixel_panics() {
        let canvas = Canvas::new(2, 2);
        canvas.pixel(2, 0);
    }
}
