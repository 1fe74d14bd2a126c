pub mod canvas;
pub mod color;
pub mod error;
pub mod generator;

pub use canvas::Canvas;
pub use color::Rgba;
pub use error::GenerateError;
pub use generator::{generate, render, write_png, GeneratorConfig};
