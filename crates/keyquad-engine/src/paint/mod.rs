//! Color model shared by the board and the renderer.

pub mod color;

pub use color::Color;
